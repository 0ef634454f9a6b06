#[macro_use]
mod common;

#[cfg(test)]
mod _super {
    tests! {
        chain in super is OK
        "A"
        "B"
    }

    tests! {
        call_same_method in super is OK
        "Derived.foo()"
        "Base.foo()"
    }

    tests! {
        call_other_method in super is OK
        "Derived.bar()"
        "Base.foo()"
    }

    tests! {
        indirectly_inherited in super is OK
        "C.foo()"
        "A.foo()"
    }

    tests! {
        constructor in super is OK
        "Derived.init()"
        "Base.init(a, b)"
    }

    tests! {
        bound_method in super is OK
        "A.method(arg)"
    }

    tests! {
        super_in_closure_in_inherited_method in super is OK
        "A"
    }

    tests! {
        reassign_superclass in super is OK
        "Base.method()"
        "Base.method()"
    }

    tests! {
        no_superclass_bind in super is ERR
        "[line 3] Error at 'super': Cannot use 'super' in a class with no superclass."
    }

    tests! {
        no_superclass_method in super is ERR
        "Undefined property 'doesNotExist'."
        "[line: 5]"
    }

    tests! {
        super_at_top_level in super is ERR
        "[line 1] Error at 'super': Cannot use 'super' outside of a class."
        "[line 2] Error at 'super': Cannot use 'super' outside of a class."
    }

    tests! {
        super_in_top_level_function in super is ERR
        "[line 2] Error at 'super': Cannot use 'super' outside of a class."
    }

    tests! {
        super_without_dot in super is ERR
        "[line 1] Error at ';': Expect '.' after 'super'."
    }
}
