#[macro_use]
mod common;

#[cfg(test)]
mod operator {
    tests! {
        add in operator is OK
        "579"
        "string"
        "scalar1"
        "2x"
        "bool: true"
        "nil: nil"
    }

    tests! {
        add_unsupported in operator is ERR
        "Operands must be numbers or strings."
        "[line: 1]"
    }

    tests! {
        subtract in operator is OK
        "1"
        "3.25"
    }

    tests! {
        subtract_nonnum in operator is ERR
        "Operands must be numbers."
        "[line: 1]"
    }

    tests! {
        multiply in operator is OK
        "15"
        "25"
    }

    tests! {
        multiply_nonnum in operator is ERR
        "Operands must be numbers."
        "[line: 1]"
    }

    tests! {
        divide_nonnum in operator is ERR
        "Operands must be numbers."
        "[line: 1]"
    }

    tests! {
        comparison in operator is OK
        "true"
        "false"
        "false"
        "true"
        "true"
        "false"
        "false"
        "false"
        "true"
        "false"
        "true"
        "true"
        "false"
        "false"
    }

    tests! {
        greater_nonnum in operator is ERR
        "Operands must be numbers."
        "[line: 1]"
    }

    tests! {
        equals in operator is OK
        "true"
        "false"
        "false"
        "true"
        "true"
        "false"
        "true"
        "false"
        "false"
        "false"
    }

    tests! {
        equals_class in operator is OK
        "true"
        "false"
        "true"
        "true"
        "false"
    }

    tests! {
        equals_method in operator is OK
        "true"
        "false"
    }

    tests! {
        negate in operator is OK
        "-3"
        "3"
        "-3"
    }

    tests! {
        negate_nonnum in operator is ERR
        "Operand must be a number."
        "[line: 1]"
    }
}
