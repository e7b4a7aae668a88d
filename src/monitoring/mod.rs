/*!
 * Monitoring
 * Structured logging setup and transaction spans
 */

mod tracer;

pub use tracer::{init_tracing, TransactionSpan};
