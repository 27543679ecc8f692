pub fn set_panic_hook() {
    // With the `console_error_panic_hook` feature on, a panic inside the
    // bridge shows up in the browser console with its message instead of an
    // opaque `unreachable` trap.
    //
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
