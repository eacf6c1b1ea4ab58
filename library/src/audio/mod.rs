pub mod buffer;
pub mod decoder;
pub mod pcm;
pub mod stream;
