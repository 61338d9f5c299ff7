use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::graph::*;

pub trait AtspWriter {
    fn try_write_atsp<W: Write>(&self, writer: W) -> Result<(), std::io::Error>;
    fn try_write_atsp_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error>;
}

impl AtspWriter for GraphMatrix {
    fn try_write_atsp<W: Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
        match self.optimum() {
            Some(optimum) => writeln!(
                writer,
                "p atsp {} {optimum}",
                self.number_of_vertices()
            )?,
            None => writeln!(writer, "p atsp {}", self.number_of_vertices())?,
        }

        for u in self.vertices() {
            let mut sep = "";
            for v in self.vertices() {
                let weight = if u == v { 0 } else { self.weight(u, v) };
                write!(writer, "{sep}{weight}")?;
                sep = " ";
            }
            writeln!(writer)?;
        }

        Ok(())
    }

    fn try_write_atsp_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_atsp(writer)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::GraphMatrixReader;
    use rand::SeedableRng;

    #[test]
    fn hard_coded() {
        let mut matrix = GraphMatrix::from_rows(&[[0, 3], [5, 0]]);
        matrix.set_optimum(8);

        let output = {
            let mut buffer: Vec<u8> = Vec::new();
            matrix.try_write_atsp(&mut buffer).expect("Failed to write");
            String::from_utf8(buffer).unwrap()
        };

        assert_eq!(output, "p atsp 2 8\n0 3\n5 0\n");
    }

    #[test]
    fn transcribe() {
        let mut rng = rand_pcg::Pcg64::seed_from_u64(1234);
        for n in 1..30 {
            let org = GraphMatrix::random_complete(&mut rng, n, 100);

            let mut buffer: Vec<u8> = Vec::new();
            org.try_write_atsp(&mut buffer).expect("Failed to write");

            let read = GraphMatrix::try_read_atsp(buffer.as_slice()).expect("Failed to read");

            assert_eq!(org, read);
        }
    }
}
