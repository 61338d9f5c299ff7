use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::graph::{NumVertices, Weight};

/// Outcome of one timed solver run on one instance
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    pub instance: String,
    pub vertices: NumVertices,
    pub weight: Weight,
    pub optimum: Option<Weight>,
    pub correct: bool,
    pub elapsed_ns: u64,
}

/// Average runtime over several runs at one instance size
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepRecord {
    pub vertices: NumVertices,
    pub iterations: u32,
    pub average_ns: u64,
}

/// Appends benchmark records as JSON lines
pub struct BenchmarkWriter<W: Write> {
    writer: W,
}

impl BenchmarkWriter<BufWriter<File>> {
    pub fn try_create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> BenchmarkWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn append<T: Serialize>(&mut self, record: &T) -> anyhow::Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        writeln!(&mut self.writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Read;

    fn demo_record() -> BenchmarkRecord {
        BenchmarkRecord {
            instance: String::from("tiny04"),
            vertices: 4,
            weight: 35,
            optimum: Some(35),
            correct: true,
            elapsed_ns: 1000,
        }
    }

    #[test]
    fn records_round_trip_as_json_lines() {
        let mut buffer: Vec<u8> = Vec::new();
        {
            let mut writer = BenchmarkWriter::new(&mut buffer);
            writer.append(&demo_record()).unwrap();
            writer
                .append(&SweepRecord {
                    vertices: 10,
                    iterations: 5,
                    average_ns: 123456,
                })
                .unwrap();
        }

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();

        let record: BenchmarkRecord = serde_json::from_str(lines.next().unwrap()).unwrap();
        assert_eq!(record, demo_record());

        let sweep: SweepRecord = serde_json::from_str(lines.next().unwrap()).unwrap();
        assert_eq!(sweep.average_ns, 123456);
        assert!(lines.next().is_none());
    }

    #[test]
    fn try_create_writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.jsonl");

        {
            let mut writer = BenchmarkWriter::try_create(&path).unwrap();
            writer.append(&demo_record()).unwrap();
        }

        let mut text = String::new();
        File::open(&path).unwrap().read_to_string(&mut text).unwrap();

        let record: BenchmarkRecord = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(record, demo_record());
    }
}
