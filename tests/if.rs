#[macro_use]
mod common;

#[cfg(test)]
mod if_stmt {
    tests! {
        if_then in if is OK
        "good"
        "block"
        "true"
    }

    tests! {
        else_branch in if is OK
        "good"
        "good"
        "block"
    }

    tests! {
        dangling_else in if is OK
        "good"
    }

    tests! {
        truth in if is OK
        "false"
        "nil"
        "true"
        "0"
        "empty"
    }

    tests! {
        var_in_then in if is ERR
        "[line 1] Error at 'var': Expect expression."
    }
}
