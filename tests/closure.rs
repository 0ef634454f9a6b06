#[macro_use]
mod common;

#[cfg(test)]
mod closure {
    tests! {
        assign_to_closure in closure is OK
        "local"
        "after f"
        "after f"
        "after g"
    }

    tests! {
        close_over_later_variable in closure is OK
        "b"
        "a"
    }

    tests! {
        closed_closure_in_function in closure is OK
        "local"
    }

    tests! {
        counter in closure is OK
        "1"
        "2"
        "3"
    }

    tests! {
        independent_counters in closure is OK
        "1"
        "2"
        "1"
    }

    tests! {
        scope_stability in closure is OK
        "global"
        "global"
    }

    tests! {
        shadow_closure_with_local in closure is OK
        "closure"
        "shadow"
        "closure"
    }

    tests! {
        nested_closure in closure is OK
        "a"
        "b"
        "c"
    }
}
