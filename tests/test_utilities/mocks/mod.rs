mod mock_row_codec;

pub use mock_row_codec::MockRowCodec;
