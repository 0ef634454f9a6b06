#[macro_use]
mod common;

#[cfg(test)]
mod constructor {
    tests! {
        arguments in constructor is OK
        "7"
    }

    tests! {
        default in constructor is OK
        "Foo instance"
    }

    tests! {
        early_return in constructor is OK
        "init"
        "Foo instance"
    }

    tests! {
        call_init_explicitly in constructor is OK
        "Foo.init(one)"
        "Foo.init(two)"
        "Foo instance"
        "init"
    }

    tests! {
        return_value in constructor is ERR
        "[line 3] Error at 'return': Cannot return a value from an initializer."
    }

    tests! {
        default_arguments in constructor is ERR
        "Expected 0 arguments but got 3."
        "[line: 3]"
    }

    tests! {
        extra_arguments in constructor is ERR
        "Expected 2 arguments but got 4."
        "[line: 8]"
    }
}
