//! Logging shims that compile to nothing unless the `tracing` feature is on.

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    };
}

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
    };
}

#[cfg(all(test, not(feature = "tracing")))]
mod tests {
    #[test]
    fn events_vanish_without_feature() {
        let evaluated = core::cell::Cell::new(0u32);
        trace!(addr = evaluated.replace(1), "holding register written");
        debug!(addr = evaluated.replace(2), "register write denied");
        assert_eq!(evaluated.get(), 0);
    }
}
