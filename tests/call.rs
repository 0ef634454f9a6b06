#[macro_use]
mod common;

#[cfg(test)]
mod call {
    tests! {
        bool in call is ERR
        "Can only call functions and classes."
        "[line: 1]"
    }

    tests! {
        nil in call is ERR
        "Can only call functions and classes."
        "[line: 1]"
    }

    tests! {
        num in call is ERR
        "Can only call functions and classes."
        "[line: 1]"
    }

    tests! {
        string in call is ERR
        "Can only call functions and classes."
        "[line: 1]"
    }

    tests! {
        instance in call is ERR
        "Can only call functions and classes."
        "[line: 3]"
    }
}
