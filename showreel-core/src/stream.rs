//! Bounded chunked file streaming.
//!
//! Copies a byte window from an open file to the client without buffering
//! the whole file: fixed-size reads, one in flight at a time, yielded as
//! `Bytes` frames so the HTTP send loop provides the backpressure. Memory
//! use is independent of file size.

use bytes::{Bytes, BytesMut};
use futures::Stream;
use futures::stream;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

/// Stream at most `len` bytes from `file` in chunks of `buffer_size`.
///
/// The file cursor must already be positioned at the window start. The
/// stream ends early on EOF (the file shrank after it was stat'd); read
/// errors surface as items and abort the transfer.
pub fn window_stream(
    file: File,
    len: u64,
    buffer_size: usize,
) -> impl Stream<Item = std::io::Result<Bytes>> + Send {
    stream::try_unfold((file, len), move |(mut file, remaining)| async move {
        if remaining == 0 {
            return Ok(None);
        }

        let chunk_len = remaining.min(buffer_size as u64) as usize;
        let mut buffer = BytesMut::zeroed(chunk_len);
        let read = file.read(&mut buffer).await?;
        if read == 0 {
            return Ok(None);
        }

        buffer.truncate(read);
        Ok(Some((buffer.freeze(), (file, remaining - read as u64))))
    })
}

#[cfg(test)]
mod tests {
    use std::io::SeekFrom;

    use futures::StreamExt;
    use tempfile::TempDir;
    use tokio::fs;
    use tokio::io::AsyncSeekExt;

    use super::*;

    async fn test_file(contents: &[u8]) -> (TempDir, File) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("window.bin");
        fs::write(&path, contents).await.unwrap();
        (dir, File::open(&path).await.unwrap())
    }

    async fn collect(stream: impl Stream<Item = std::io::Result<Bytes>>) -> Vec<Bytes> {
        stream.map(|chunk| chunk.unwrap()).collect().await
    }

    fn flatten(chunks: &[Bytes]) -> Vec<u8> {
        let mut out = Vec::new();
        for chunk in chunks {
            out.extend_from_slice(chunk);
        }
        out
    }

    #[tokio::test]
    async fn test_streams_window_in_buffer_sized_chunks() {
        let contents: Vec<u8> = (0..1000u16).map(|i| (i % 251) as u8).collect();
        let (_dir, file) = test_file(&contents).await;

        let chunks = collect(window_stream(file, 1000, 256)).await;
        assert_eq!(chunks.len(), 4); // 256 + 256 + 256 + 232
        assert_eq!(chunks[0].len(), 256);
        assert_eq!(chunks[3].len(), 232);
        assert_eq!(flatten(&chunks), contents);
    }

    #[tokio::test]
    async fn test_respects_seek_position() {
        let contents: Vec<u8> = (0..500u16).map(|i| (i % 251) as u8).collect();
        let (_dir, mut file) = test_file(&contents).await;
        file.seek(SeekFrom::Start(100)).await.unwrap();

        let chunks = collect(window_stream(file, 50, 4096)).await;
        assert_eq!(flatten(&chunks), contents[100..150]);
    }

    #[tokio::test]
    async fn test_stops_at_eof_when_window_exceeds_file() {
        let (_dir, file) = test_file(&[42u8; 300]).await;

        let chunks = collect(window_stream(file, 10_000, 128)).await;
        assert_eq!(flatten(&chunks), vec![42u8; 300]);
    }

    #[tokio::test]
    async fn test_zero_length_window_is_empty() {
        let (_dir, file) = test_file(b"content").await;

        let chunks = collect(window_stream(file, 0, 128)).await;
        assert!(chunks.is_empty());
    }
}
