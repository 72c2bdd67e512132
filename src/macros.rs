//! Logging macros.
//!
//! Every level macro takes optional leading keywords, in this order, before
//! the format string:
//!
//! - `spec: &LogSpec,` use a module's own spec instead of the global one
//! - `module: ModuleLog,` module-wide minimum level and default tag, see
//!   [`ModuleLog`](crate::ModuleLog)
//! - `tag: &str,` tag for this call
//! - `mem: bytes,` dump these bytes after the message, one line per chunk
//!
//! ```
//! # let frame = [0u8; 4];
//! stacklog::info!("listening on port {}", 8080);
//! stacklog::warn!(tag: "NET", "retrying in {}s", 5);
//! stacklog::debug!(tag: "NET", mem: &frame, "frame of {} bytes", frame.len());
//! ```
//!
//! When the level is below [`STATIC_MIN_LEVEL`](crate::level::STATIC_MIN_LEVEL)
//! (or the `module:` minimum, which replaces it) or the runtime output level,
//! none of the arguments are evaluated.

/// Name of the enclosing function.
#[doc(hidden)]
#[macro_export]
macro_rules! __function {
    () => {{
        fn __f() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::__private::function_name(__type_name_of(__f))
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    (@compiled_in (); $level:expr) => {
        $crate::level::compiled_in($level)
    };
    (@compiled_in ($module:expr); $level:expr) => {
        $crate::ModuleLog::compiled_in(&$module, $level)
    };
    (@output_allows (); $level:expr) => {
        $crate::output_level().allows($level)
    };
    (@output_allows ($module:expr); $level:expr) => {
        $crate::ModuleLog::output_allows(&$module, $level)
    };
    (@tag (); $tag:expr) => {
        $tag
    };
    (@tag ($module:expr); $tag:expr) => {
        $crate::ModuleLog::tag_or_default(&$module, $tag)
    };
    (@emit ($($spec:expr)?) ($($module:expr)?); $lvl:expr; $tag:expr; $mem:expr; $($arg:tt)+) => {{
        let __level: $crate::Level = $lvl;
        if $crate::__log!(@compiled_in ($($module)?); __level)
            && $crate::__log!(@output_allows ($($module)?); __level)
        {
            let __tag: ::core::option::Option<&str> = $tag;
            $crate::__private::dispatch(
                ::core::option::Option::None $(.or(::core::option::Option::Some($spec)))?,
                &$crate::__private::Record {
                    level: __level,
                    tag: $crate::__log!(@tag ($($module)?); __tag),
                    location: ::core::option::Option::Some($crate::__private::Location {
                        function: $crate::__function!(),
                        file: ::core::file!(),
                        line: ::core::line!(),
                    }),
                    args: ::core::format_args!($($arg)+),
                    mem: $mem,
                },
            );
        }
    }};
    (($($spec:expr)?) ($($module:expr)?); $lvl:expr; spec: $aux:expr, $($rest:tt)+) => {
        $crate::__log!(($aux) ($($module)?); $lvl; $($rest)+)
    };
    (($($spec:expr)?) ($($module:expr)?); $lvl:expr; module: $m:expr, $($rest:tt)+) => {
        $crate::__log!(($($spec)?) ($m); $lvl; $($rest)+)
    };
    (($($spec:expr)?) ($($module:expr)?); $lvl:expr; tag: $tag:expr, mem: $mem:expr, $($arg:tt)+) => {
        $crate::__log!(@emit ($($spec)?) ($($module)?); $lvl;
            ::core::option::Option::Some($tag);
            ::core::option::Option::Some(::core::convert::AsRef::<[u8]>::as_ref(&$mem));
            $($arg)+)
    };
    (($($spec:expr)?) ($($module:expr)?); $lvl:expr; tag: $tag:expr, $($arg:tt)+) => {
        $crate::__log!(@emit ($($spec)?) ($($module)?); $lvl;
            ::core::option::Option::Some($tag);
            ::core::option::Option::None;
            $($arg)+)
    };
    (($($spec:expr)?) ($($module:expr)?); $lvl:expr; mem: $mem:expr, $($arg:tt)+) => {
        $crate::__log!(@emit ($($spec)?) ($($module)?); $lvl;
            ::core::option::Option::None;
            ::core::option::Option::Some(::core::convert::AsRef::<[u8]>::as_ref(&$mem));
            $($arg)+)
    };
    (($($spec:expr)?) ($($module:expr)?); $lvl:expr; $($arg:tt)+) => {
        $crate::__log!(@emit ($($spec)?) ($($module)?); $lvl;
            ::core::option::Option::None;
            ::core::option::Option::None;
            $($arg)+)
    };
}

/// Logs at a level chosen at run time.
///
/// ```
/// # use stacklog::Level;
/// let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
/// stacklog::log!(level, "build profile decided the level");
/// ```
#[macro_export]
macro_rules! log {
    ($lvl:expr, $($arg:tt)+) => {
        $crate::__log!(() (); $lvl; $($arg)+)
    };
}

#[macro_export]
macro_rules! verbose {
    ($($arg:tt)+) => {
        $crate::__log!(() (); $crate::Level::Verbose; $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::__log!(() (); $crate::Level::Debug; $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::__log!(() (); $crate::Level::Info; $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::__log!(() (); $crate::Level::Warn; $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::__log!(() (); $crate::Level::Error; $($arg)+)
    };
}

/// Logs, flushes the output, and aborts the process.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => {
        $crate::__log!(() (); $crate::Level::Fatal; $($arg)+)
    };
}

/// Runs its body only when secrets are not censored (see
/// [`CENSORED`](crate::level::CENSORED)). The body is still type-checked.
///
/// ```
/// let password = "hunter2";
/// stacklog::secret! {
///     stacklog::debug!("password: {}", password);
/// }
/// ```
#[macro_export]
macro_rules! secret {
    ($($body:tt)*) => {
        if !$crate::level::CENSORED {
            $($body)*
        }
    };
}
