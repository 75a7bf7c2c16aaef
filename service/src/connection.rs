use std::io::{self, BufRead, Write};

use log::debug;

use super::commands::{Request, Response};
use super::decoder::Decoder;
use super::encoder::Encoder;

/// Line protocol: one request per input line, one JSON response per output line.
pub struct Connection<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Connection<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Feeds every request to `callback` until `quit` or end of input.
    pub fn listen<F>(&mut self, mut callback: F) -> io::Result<()>
    where
        F: FnMut(&Request) -> Option<Response>,
    {
        let decoder = Decoder::new();
        let encoder = Encoder {};

        loop {
            let mut in_line = String::new();
            if self.reader.read_line(&mut in_line)? == 0 {
                debug!("End of input");
                break;
            }

            let in_line = in_line.trim();
            if in_line.is_empty() {
                continue;
            }
            debug!("Input: {:?}", in_line);

            let request = decoder.decode(in_line);

            if let Some(response) = callback(&request) {
                let out_line = encoder.encode(&response);
                debug!("Output: {:?}", out_line);
                writeln!(self.writer, "{}", out_line)?;
                self.writer.flush()?;
            }

            if matches!(request, Request::Quit) {
                break;
            }
        }

        Ok(())
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listen_until_quit() {
        let input = "legal\n\nbot\nquit\nlegal\n";
        let mut connection = Connection::new(input.as_bytes(), Vec::new());

        let mut seen = Vec::new();
        connection
            .listen(|request| {
                seen.push(request.clone());
                match request {
                    Request::LegalMoves => Some(Response::LegalMoves {
                        legal_moves: vec!["e2e4".to_string()],
                    }),
                    _ => None,
                }
            })
            .unwrap();

        assert_eq!(
            seen,
            vec![
                Request::LegalMoves,
                Request::BotMove { agent: None },
                Request::Quit
            ]
        );
        let output = String::from_utf8(connection.into_writer()).unwrap();
        assert_eq!(output, "{\"legal_moves\":[\"e2e4\"]}\n");
    }

    #[test]
    fn test_listen_stops_at_end_of_input() {
        let mut connection = Connection::new("legal".as_bytes(), Vec::new());
        let mut calls = 0;
        connection
            .listen(|_| {
                calls += 1;
                None
            })
            .unwrap();
        assert_eq!(calls, 1);
    }
}
