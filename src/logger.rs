use env_logger::Builder;
use log::LevelFilter;

/// `level` replaces any global level from `RUST_LOG`; per-module
/// directives in `RUST_LOG` (e.g. `spheretrace::render=trace`) still apply.
pub fn init_logger(level: LevelFilter) {
    with_default_level(Builder::from_default_env(), level).init();
}

fn with_default_level(mut builder: Builder, level: LevelFilter) -> Builder {
    builder.filter_level(level).format_timestamp(None);
    return builder;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built(env_filters: &str, level: LevelFilter) -> LevelFilter {
        let mut builder = Builder::new();
        builder.parse_filters(env_filters);
        return with_default_level(builder, level).build().filter();
    }

    #[test]
    fn cli_level_overrides_global_env_level() {
        assert_eq!(built("error", LevelFilter::Info), LevelFilter::Info);
        assert_eq!(built("trace", LevelFilter::Warn), LevelFilter::Warn);
    }

    #[test]
    fn per_module_env_directives_survive() {
        let max = built("warn,spheretrace::render=trace", LevelFilter::Info);
        assert_eq!(max, LevelFilter::Trace);
    }
}
