//! Line-oriented input for the scanner and for `io.read()`.

use std::io::{self, BufRead};

/// Something that hands out source text one line at a time.
///
/// Mirrors [`BufRead::read_line`]: the line is appended to `buf` including
/// its terminator, and `Ok(0)` signals end of input.
///
/// [`io::Stdin`] is implemented by locking per call, so the scanner and
/// `io.read()` can both consume standard input without holding the lock.
pub trait LineSource {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineSource for io::Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::Stdin::read_line(self, buf)
    }
}

impl<R: io::Read> LineSource for io::BufReader<R> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

impl LineSource for &[u8] {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

impl<T: LineSource + ?Sized> LineSource for Box<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        (**self).read_line(buf)
    }
}
