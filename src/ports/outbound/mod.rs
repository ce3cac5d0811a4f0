/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the datastore and report layers
/// use to interact with external systems (file system, console, etc.).
pub mod output_presenter;
pub mod row_codec;

pub use output_presenter::OutputPresenter;
pub use row_codec::RowCodec;
