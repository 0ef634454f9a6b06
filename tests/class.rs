#[macro_use]
mod common;

#[cfg(test)]
mod class {
    tests! {
        empty in class is OK
        "<class Foo>"
    }

    tests! {
        inherited_method in class is OK
        "in foo"
        "in bar"
    }

    tests! {
        local_reference_self in class is OK
        "<class Foo>"
    }

    tests! {
        inherit_self in class is ERR
        "[line 1] Error at 'Foo': A class cannot inherit from itself."
    }
}
