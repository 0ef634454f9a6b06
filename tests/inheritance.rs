#[macro_use]
mod common;

#[cfg(test)]
mod inheritance {
    tests! {
        inherit_methods in inheritance is OK
        "foo"
        "bar"
        "bar"
    }

    tests! {
        set_fields_from_base_class in inheritance is OK
        "foo 1"
        "foo 2"
        "bar 1"
        "bar 2"
        "bar 1"
        "bar 2"
    }

    tests! {
        constructor in inheritance is OK
        "value"
    }

    tests! {
        parenthesized_superclass in inheritance is ERR
        "[line 3] Error at '(': Expect superclass name."
    }

    tests! {
        superclass_must_be_class in inheritance is ERR
        "Superclass must be a class."
        "[line: 2]"
    }
}
