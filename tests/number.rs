#[macro_use]
mod common;

#[cfg(test)]
mod number {
    tests! {
        literals in number is OK
        "123"
        "987654"
        "0"
        "-0"
        "123.456"
        "-0.001"
    }

    tests! {
        formatting in number is OK
        "1"
        "1.5"
        "0"
        "1"
        "100.5"
    }

    tests! {
        division in number is OK
        "4"
        "2.5"
        "inf"
        "NaN"
    }

    tests! {
        trailing_dot in number is ERR
        "[line 1] Error at ';': Expect property name after '.'."
    }

    tests! {
        leading_dot in number is ERR
        "[line 1] Error at '.': Expect expression."
    }
}
