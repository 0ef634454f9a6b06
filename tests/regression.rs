#[macro_use]
mod common;

#[cfg(test)]
mod regression {
    // Two same-named reads on one line must resolve to different depths.
    tests! {
        same_line_shadowing in regression is OK
        "1"
        "1"
    }
}
