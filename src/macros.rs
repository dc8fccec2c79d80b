//! Private macros

/// Evaluates `$block`, logging how long it took at the `info` level.
macro_rules! elapsed {
    ($msg:expr, $block:expr) => {{
        let start = ::std::time::Instant::now();
        let out = $block;
        let elapsed = start.elapsed();

        log::info!("{} took {:?}", $msg, elapsed);

        out
    }};
}
