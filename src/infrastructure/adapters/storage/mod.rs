//! Storage Adapter - 文件系统参考音频实现

mod file_reference_audio;

pub use file_reference_audio::FileReferenceAudio;
