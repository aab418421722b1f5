/// Generates a doc line linking to a section of the JVM specification.
macro_rules! see_jvm_spec {
    ($chapter:literal, $section:literal $(, $sub:literal)*) => {
        concat!(
            "See the [JVM Specification §",
            $chapter, ".", $section, $(".", $sub,)*
            "](https://docs.oracle.com/javase/specs/jvms/se21/html/jvms-",
            $chapter, ".html#jvms-", $chapter, ".", $section, $(".", $sub,)*
            ") for more information."
        )
    };
}

/// Traces a rejected input when the `log` feature is enabled.
macro_rules! trace_rejected {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        log::trace!($($arg)+);
    };
}

pub(crate) use see_jvm_spec;
pub(crate) use trace_rejected;
