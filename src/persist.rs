use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use log::debug;
use crate::error::{Result, RngError};
use crate::rng::Rng;

// Raw state persistence. A dump is exactly `size()` bytes in native byte order
// with no header: the reader must already know the generator type, and a dump
// from another type or architecture loads without complaint into a meaningless state.

impl Rng {
    /// Writes the state to `sink`.
    pub fn write<W: Write>(&self, mut sink: W) -> Result<()> {
        let bytes = self.save_state();
        sink.write_all(&bytes)?;
        sink.flush()?;
        debug!("wrote {} bytes of {} state", bytes.len(), self.name());
        Ok(())
    }

    /// Replaces the state with `size()` bytes read from `source`.
    /// On failure the state is left untouched.
    pub fn read<R: Read>(&mut self, mut source: R) -> Result<()> {
        let mut bytes = vec![0; self.size()];
        source.read_exact(&mut bytes)?;
        self.load_state(&bytes);
        debug!("read {} bytes of {} state", bytes.len(), self.name());
        Ok(())
    }

    /// Writes the state to a file. The bytes go to a temporary file next to `path`
    /// that is then renamed over it, so `path` never holds a partial dump.
    pub fn write_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let temp = temp_path(path);
        let saved = self.write_synced(&temp).and_then(|()| fs::rename(&temp, path).map_err(RngError::from));
        if let Err(e) = saved {
            // The temporary may not exist; the original error is the one to report.
            let _ = fs::remove_file(&temp);
            return Err(e);
        }
        debug!("saved {} state to {}", self.name(), path.display());
        Ok(())
    }

    fn write_synced(&self, path: &Path) -> Result<()> {
        let mut file = File::create(path)?;
        self.write(&mut file)?;
        file.sync_all()?;
        Ok(())
    }

    /// Replaces the state from a file written by `write_file`.
    /// The file must hold exactly `size()` bytes.
    pub fn read_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let len = file.metadata()?.len();
        if len != self.size() as u64 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{} holds {} bytes, a {} state takes {}", path.display(), len, self.name(), self.size()),
            ).into());
        }
        self.read(file)
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)] mod tests {
    use super::*;
    use crate::catalog::*;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("rand_gsl_{}_{}", std::process::id(), name))
    }

    #[test] fn stream_round_trip() {
        let mut a = Rng::with_seed(&RANLXS1, 42);
        a.get_vec(37);
        let mut bytes = Vec::new();
        a.write(&mut bytes).unwrap();
        assert_eq!(bytes.len(), a.size());

        let mut b = Rng::new(&RANLXS1);
        b.read(&bytes[..]).unwrap();
        assert_eq!(a.get_vec(500), b.get_vec(500));
    }

    #[test] fn short_read_leaves_state_alone() {
        let a = Rng::with_seed(&MT19937, 5);
        let mut bytes = Vec::new();
        a.write(&mut bytes).unwrap();

        let mut b = Rng::with_seed(&MT19937, 6);
        let mut reference = b.clone();
        let result = b.read(&bytes[.. bytes.len() - 1]);
        assert!(matches!(result, Err(RngError::Io(ref e)) if e.kind() == io::ErrorKind::UnexpectedEof));
        assert_eq!(b.get_vec(100), reference.get_vec(100));
    }

    #[test] fn file_round_trip() {
        let path = scratch("file_round_trip");
        let mut a = Rng::with_seed(&GFSR4, 3);
        a.get_vec(1000);
        a.write_file(&path).unwrap();
        assert_eq!(fs::metadata(&path).unwrap().len(), GFSR4.size() as u64);
        assert!(!temp_path(&path).exists());

        let mut b = Rng::new(&GFSR4);
        b.read_file(&path).unwrap();
        assert_eq!(a.get_vec(100), b.get_vec(100));
        fs::remove_file(&path).unwrap();
    }

    #[test] fn file_of_wrong_length_is_rejected() {
        let path = scratch("wrong_length");
        Rng::new(&TAUS).write_file(&path).unwrap();
        let mut r = Rng::new(&MT19937);
        let mut reference = r.clone();
        assert!(matches!(r.read_file(&path), Err(RngError::Io(ref e)) if e.kind() == io::ErrorKind::InvalidData));
        assert_eq!(r.get_vec(10), reference.get_vec(10));
        fs::remove_file(&path).unwrap();
    }

    #[test] fn missing_file_is_an_io_error() {
        let mut r = Rng::new(&MT19937);
        assert!(matches!(r.read_file(scratch("missing")), Err(RngError::Io(_))));
    }

    #[test] fn failed_write_leaves_no_temporary() {
        let dir = scratch("no_such_dir");
        let path = dir.join("state");
        assert!(matches!(Rng::new(&MT19937).write_file(&path), Err(RngError::Io(_))));
        assert!(!temp_path(&path).exists());
    }
}
