#[macro_use]
mod common;

#[cfg(test)]
mod variable {
    tests! {
        in_middle_of_block in variable is OK
        "a"
        "a b"
        "a c"
        "a b d"
    }

    tests! {
        in_nested_block in variable is OK
        "outer"
    }

    tests! {
        scope_reuse_in_different_blocks in variable is OK
        "first"
        "second"
    }

    tests! {
        shadow_and_local in variable is OK
        "outer"
        "inner"
    }

    tests! {
        shadow_global in variable is OK
        "shadow"
        "global"
    }

    tests! {
        shadow_local in variable is OK
        "shadow"
        "local"
    }

    tests! {
        redeclare_global in variable is OK
        "nil"
    }

    tests! {
        redefine_global in variable is OK
        "2"
    }

    tests! {
        uninitialized in variable is OK
        "nil"
    }

    tests! {
        unreached_undefined in variable is OK
        "ok"
    }

    tests! {
        use_global_in_initializer in variable is OK
        "value"
    }

    tests! {
        duplicate_local in variable is ERR
        "[line 3] Error at 'a': A variable is already defined with name 'a' in this scope."
    }

    tests! {
        duplicate_parameter in variable is ERR
        "[line 1] Error at 'arg': A variable is already defined with name 'arg' in this scope."
    }

    tests! {
        collide_with_parameter in variable is ERR
        "[line 2] Error at 'a': A variable is already defined with name 'a' in this scope."
    }

    tests! {
        use_local_in_initializer in variable is ERR
        "[line 3] Error at 'a': Cannot read local variable in its own initializer."
    }

    tests! {
        undefined_global in variable is ERR
        "Undefined variable 'notDefined'."
        "[line: 1]"
    }

    tests! {
        undefined_local in variable is ERR
        "Undefined variable 'notDefined'."
        "[line: 2]"
    }

    tests! {
        use_false_as_var in variable is ERR
        "[line 1] Error at 'false': Expect variable name."
    }

    tests! {
        use_nil_as_var in variable is ERR
        "[line 1] Error at 'nil': Expect variable name."
    }

    tests! {
        use_this_as_var in variable is ERR
        "[line 1] Error at 'this': Expect variable name."
    }
}
