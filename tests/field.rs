#[macro_use]
mod common;

#[cfg(test)]
mod field {
    tests! {
        get_and_set in field is OK
        "value"
        "other"
    }

    tests! {
        call_function_field in field is OK
        "bar"
        "1"
        "2"
    }

    tests! {
        method in field is OK
        "got method"
        "arg"
    }

    tests! {
        field_shadows_method in field is OK
        "method"
        "field"
    }

    tests! {
        method_binds_this in field is OK
        "foo1"
        "1"
    }

    tests! {
        set_on_nil in field is ERR
        "Only instances have fields."
        "[line: 1]"
    }

    tests! {
        get_on_bool in field is ERR
        "Only instances have properties."
        "[line: 1]"
    }

    tests! {
        undefined in field is ERR
        "Undefined property 'bar'."
        "[line: 4]"
    }
}
