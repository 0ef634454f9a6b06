#[macro_use]
mod common;

#[cfg(test)]
mod for_loop {
    tests! {
        desugar in for is OK
        "0"
        "1"
        "2"
    }

    tests! {
        scope in for is OK
        "0"
        "-1"
    }

    tests! {
        closure_in_body in for is OK
        "4"
        "1"
        "4"
        "2"
        "4"
        "3"
    }

    tests! {
        return_inside in for is OK
        "done"
    }
}
