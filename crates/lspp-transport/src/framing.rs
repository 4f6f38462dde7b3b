//! Message framing for LSP Base Protocol
//!
//! Implements Content-Length based message framing as specified in
//! the LSP Base Protocol.

use std::io::{self, BufRead, ErrorKind, Write};

/// Upper bound on a frame body. A forged Content-Length past this is
/// rejected instead of allocated.
pub const MAX_FRAME_SIZE: usize = 10 * 1024 * 1024;

/// What one framed read produced.
#[derive(Debug)]
pub enum ReadOutcome {
    /// A complete frame body, exactly Content-Length bytes.
    Frame(Vec<u8>),
    /// EOF before any header byte; the peer closed the stream cleanly.
    EndOfInput,
    /// The frame could not be read (bad or missing Content-Length, header
    /// block cut short, truncated body). The caller should skip it and keep
    /// reading; no reply must be sent for it.
    Malformed,
}

/// Read one LSP frame from a buffered reader.
///
/// Header keys are matched case-insensitively; any header other than
/// `Content-Length` is consumed and ignored. Returns `Err` only for I/O
/// errors; protocol-level problems come back as [`ReadOutcome::Malformed`].
pub fn read_frame<R: BufRead>(reader: &mut R) -> io::Result<ReadOutcome> {
    let mut content_length: Option<usize> = None;
    let mut first = true;

    // Read header lines until the blank terminator
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            // Clean EOF only at a frame boundary
            return Ok(if first { ReadOutcome::EndOfInput } else { ReadOutcome::Malformed });
        }
        first = false;

        let line = line.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            break;
        }

        if let Some((key, value)) = line.split_once(':') {
            if key.trim().eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse::<usize>().ok();
            }
        }
    }

    let length = match content_length {
        Some(n) if n > 0 && n <= MAX_FRAME_SIZE => n,
        _ => return Ok(ReadOutcome::Malformed),
    };

    let mut body = vec![0u8; length];
    match reader.read_exact(&mut body) {
        Ok(()) => Ok(ReadOutcome::Frame(body)),
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(ReadOutcome::Malformed),
        Err(e) => Err(e),
    }
}

/// Write one LSP frame: `Content-Length: N\r\n\r\n` followed by the body.
pub fn write_frame<W: Write>(writer: &mut W, body: &[u8], flush: bool) -> io::Result<()> {
    write!(writer, "Content-Length: {}\r\n\r\n", body.len())?;
    writer.write_all(body)?;
    if flush {
        writer.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Cursor;

    fn read_all(input: &[u8]) -> io::Result<ReadOutcome> {
        read_frame(&mut Cursor::new(input.to_vec()))
    }

    #[test]
    fn reads_a_well_formed_frame() {
        let input = b"Content-Length: 2\r\n\r\n{}";
        match read_all(input).unwrap() {
            ReadOutcome::Frame(body) => assert_eq!(body, b"{}"),
            other => panic!("expected frame, got {other:?}"),
        }
    }

    #[test]
    fn header_key_is_case_insensitive() {
        let input = b"content-length: 4\r\n\r\nabcd";
        match read_all(input).unwrap() {
            ReadOutcome::Frame(body) => assert_eq!(body, b"abcd"),
            other => panic!("expected frame, got {other:?}"),
        }
    }

    #[test]
    fn extra_headers_are_ignored() {
        let input =
            b"Content-Type: application/vscode-jsonrpc\r\nContent-Length: 3\r\n\r\nxyz";
        match read_all(input).unwrap() {
            ReadOutcome::Frame(body) => assert_eq!(body, b"xyz"),
            other => panic!("expected frame, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_is_end_of_input() {
        assert!(matches!(read_all(b"").unwrap(), ReadOutcome::EndOfInput));
    }

    #[test]
    fn missing_content_length_is_malformed() {
        assert!(matches!(
            read_all(b"Content-Type: text\r\n\r\n{}").unwrap(),
            ReadOutcome::Malformed
        ));
    }

    #[test]
    fn non_numeric_length_is_malformed() {
        assert!(matches!(
            read_all(b"Content-Length: two\r\n\r\n{}").unwrap(),
            ReadOutcome::Malformed
        ));
    }

    #[test]
    fn zero_length_is_malformed() {
        assert!(matches!(read_all(b"Content-Length: 0\r\n\r\n").unwrap(), ReadOutcome::Malformed));
    }

    #[test]
    fn oversized_length_is_rejected_without_allocating() {
        let input = format!("Content-Length: {}\r\n\r\n", MAX_FRAME_SIZE + 1);
        assert!(matches!(read_all(input.as_bytes()).unwrap(), ReadOutcome::Malformed));
    }

    #[test]
    fn truncated_body_is_malformed() {
        assert!(matches!(
            read_all(b"Content-Length: 10\r\n\r\n{}").unwrap(),
            ReadOutcome::Malformed
        ));
    }

    #[test]
    fn eof_inside_headers_is_malformed() {
        assert!(matches!(read_all(b"Content-Length: 2\r\n").unwrap(), ReadOutcome::Malformed));
    }

    #[test]
    fn consecutive_frames_read_in_order() {
        let mut buf = Vec::new();
        write_frame(&mut buf, b"one", false).unwrap();
        write_frame(&mut buf, b"three", false).unwrap();

        let mut cursor = Cursor::new(buf);
        match read_frame(&mut cursor).unwrap() {
            ReadOutcome::Frame(b) => assert_eq!(b, b"one"),
            other => panic!("expected frame, got {other:?}"),
        }
        match read_frame(&mut cursor).unwrap() {
            ReadOutcome::Frame(b) => assert_eq!(b, b"three"),
            other => panic!("expected frame, got {other:?}"),
        }
        assert!(matches!(read_frame(&mut cursor).unwrap(), ReadOutcome::EndOfInput));
    }

    #[test]
    fn written_frame_has_one_separator() {
        let mut buf = Vec::new();
        write_frame(&mut buf, b"{\"id\":1}", true).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.matches("\r\n\r\n").count(), 1);
        assert!(text.starts_with("Content-Length: 8\r\n\r\n"));
    }

    proptest! {
        #[test]
        fn round_trip_preserves_any_body(body in proptest::collection::vec(any::<u8>(), 1..4096)) {
            let mut buf = Vec::new();
            write_frame(&mut buf, &body, false).unwrap();

            let mut cursor = Cursor::new(buf);
            match read_frame(&mut cursor).unwrap() {
                ReadOutcome::Frame(read_back) => prop_assert_eq!(read_back, body),
                other => prop_assert!(false, "expected frame, got {:?}", other),
            }
        }
    }
}
