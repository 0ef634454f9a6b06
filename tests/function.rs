#[macro_use]
mod common;

#[cfg(test)]
mod function {
    tests! {
        print in function is OK
        "<fn foo>"
        "<native fn clock>"
    }

    tests! {
        parameters in function is OK
        "0"
        "1"
        "3"
        "6"
    }

    tests! {
        recursion in function is OK
        "21"
    }

    tests! {
        local_recursion in function is OK
        "21"
    }

    tests! {
        nested_call_with_arguments in function is OK
        "hello world"
    }

    tests! {
        extra_arguments in function is ERR
        "Expected 2 arguments but got 4."
        "[line: 6]"
    }

    tests! {
        missing_arguments in function is ERR
        "Expected 2 arguments but got 1."
        "[line: 3]"
    }

    tests! {
        too_many_parameters in function is ERR
        "[line 1] Error at 'p9': Cannot have more than 8 parameters."
    }

    tests! {
        too_many_arguments in function is ERR
        "[line 3] Error at '9': Cannot have more than 8 arguments."
    }

    tests! {
        body_must_be_block in function is ERR
        "[line 1] Error at '123': Expect '{' before function body."
    }

    tests! {
        missing_comma_in_parameters in function is ERR
        "[line 1] Error at 'c': Expect ')' after parameters."
    }
}
