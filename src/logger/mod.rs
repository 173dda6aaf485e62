use slog::Drain;
use slog_scope::GlobalLoggerGuard;

pub fn init_logger() -> GlobalLoggerGuard {
    let decorator = slog_term::TermDecorator::new().stderr().build();
    let drain = slog_term::CompactFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    let logger = slog::Logger::root(drain, o!("app" => "sgtest"));
    slog_scope::set_global_logger(logger)
}
