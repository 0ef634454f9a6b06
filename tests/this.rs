#[macro_use]
mod common;

#[cfg(test)]
mod this {
    tests! {
        in_method in this is OK
        "baz"
    }

    tests! {
        closure in this is OK
        "Foo"
    }

    tests! {
        at_top_level in this is ERR
        "[line 1] Error at 'this': Cannot use 'this' outside of a class."
    }

    tests! {
        in_top_level_function in this is ERR
        "[line 2] Error at 'this': Cannot use 'this' outside of a class."
    }
}
