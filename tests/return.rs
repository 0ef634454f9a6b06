#[macro_use]
mod common;

#[cfg(test)]
mod return_stmt {
    tests! {
        after_if in return is OK
        "ok"
    }

    tests! {
        after_while in return is OK
        "ok"
    }

    tests! {
        return_nil_if_no_value in return is OK
        "nil"
    }

    tests! {
        no_return in return is OK
        "body"
        "nil"
    }

    tests! {
        in_method in return is OK
        "done"
    }

    tests! {
        at_top_level in return is ERR
        "[line 1] Error at 'return': Cannot return from top-level code."
    }
}
