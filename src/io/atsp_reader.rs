use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Lines},
    path::Path,
};

use crate::graph::{GraphMatrix, NumVertices, Vertex, Weight};

pub type Result<T> = std::io::Result<T>;

pub trait GraphMatrixReader: Sized {
    fn try_read_atsp<R: BufRead>(reader: R) -> Result<Self>;
    fn try_read_atsp_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

impl GraphMatrixReader for GraphMatrix {
    fn try_read_atsp<R: BufRead>(reader: R) -> Result<Self> {
        let mut atsp_reader = AtspReader::try_new(reader)?;

        let mut matrix = GraphMatrix::new(atsp_reader.number_of_vertices());
        for u in 0..atsp_reader.number_of_vertices() {
            for (v, weight) in atsp_reader.try_next_row()?.into_iter().enumerate() {
                matrix.set_weight(u, v as Vertex, weight);
            }
        }

        if let Some(optimum) = atsp_reader.optimum() {
            matrix.set_optimum(optimum);
        }

        Ok(matrix)
    }

    fn try_read_atsp_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = File::open(path)?;
        let buf_reader = BufReader::new(reader);
        Self::try_read_atsp(buf_reader)
    }
}

/// Streaming reader for the line-oriented instance format:
/// lines starting with `c` are comments, the header is
/// `p atsp <n> [<optimum>]`, followed by `n` rows of `n` weights.
pub struct AtspReader<R> {
    lines: Lines<R>,
    number_of_vertices: NumVertices,
    optimum: Option<Weight>,
}

macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(std::io::Error::new($kind, $info));
        }
    };
}

macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let next = $iterator.next();
        raise_error_unless!(
            next.is_some(),
            ErrorKind::InvalidData,
            format!("Premature end of line when parsing {}.", $name)
        );

        let parsed = next.unwrap().parse();
        raise_error_unless!(
            parsed.is_ok(),
            ErrorKind::InvalidData,
            format!("Invalid value found. Cannot parse {}.", $name)
        );

        parsed.unwrap()
    }};
}

impl<R: BufRead> AtspReader<R> {
    pub fn try_new(reader: R) -> Result<Self> {
        let mut atsp_reader = Self {
            lines: reader.lines(),
            number_of_vertices: 0,
            optimum: None,
        };

        (atsp_reader.number_of_vertices, atsp_reader.optimum) = atsp_reader.parse_header()?;
        Ok(atsp_reader)
    }

    pub fn number_of_vertices(&self) -> NumVertices {
        self.number_of_vertices
    }

    /// The known optimal tour weight recorded in the header, if any
    pub fn optimum(&self) -> Option<Weight> {
        self.optimum
    }

    fn next_non_comment_line(&mut self) -> Result<Option<String>> {
        loop {
            let line = self.lines.next();
            match line {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line)) if line.starts_with('c') => continue,
                Some(Ok(line)) => return Ok(Some(line)),
            }
        }
    }

    fn parse_header(&mut self) -> Result<(NumVertices, Option<Weight>)> {
        let line = self.next_non_comment_line()?;

        raise_error_unless!(line.is_some(), ErrorKind::InvalidData, "No header found");
        let line = line.unwrap();

        let mut parts = line.split(' ').filter(|t| !t.is_empty());

        raise_error_unless!(
            parts.next().is_some_and(|t| t.starts_with('p')),
            ErrorKind::InvalidData,
            "Invalid header found; line should start with p"
        );

        raise_error_unless!(
            parts.next() == Some("atsp"),
            ErrorKind::InvalidData,
            "Invalid header found; file type should be \"atsp\""
        );

        let number_of_vertices: NumVertices =
            parse_next_value!(parts, "Header>Number of vertices");

        raise_error_unless!(
            number_of_vertices > 0,
            ErrorKind::InvalidData,
            "Invalid header found; instance needs at least one vertex"
        );

        let optimum = match parts.next() {
            None => None,
            Some(token) => {
                let parsed = token.parse();
                raise_error_unless!(
                    parsed.is_ok(),
                    ErrorKind::InvalidData,
                    "Invalid header found; cannot parse optimum"
                );
                Some(parsed.unwrap())
            }
        };

        raise_error_unless!(
            parts.next().is_none(),
            ErrorKind::InvalidData,
            "Invalid header found; expected end of line"
        );

        Ok((number_of_vertices, optimum))
    }

    /// Reads the next weight row; it must hold exactly `n` values
    pub fn try_next_row(&mut self) -> Result<Vec<Weight>> {
        let line = self.next_non_comment_line()?;

        raise_error_unless!(
            line.is_some(),
            ErrorKind::InvalidData,
            "Premature end of file when parsing weight rows"
        );

        let line = line.unwrap();
        let mut row = Vec::with_capacity(self.number_of_vertices as usize);
        for token in line.split_whitespace() {
            let parsed = token.parse();
            raise_error_unless!(
                parsed.is_ok(),
                ErrorKind::InvalidData,
                format!("Invalid value found. Cannot parse weight {token:?}.")
            );
            row.push(parsed.unwrap());
        }

        raise_error_unless!(
            row.len() == self.number_of_vertices as usize,
            ErrorKind::InvalidData,
            format!(
                "Weight row holds {} values, expected {}",
                row.len(),
                self.number_of_vertices
            )
        );

        Ok(row)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::DistanceMatrix;

    #[test]
    fn test_success() {
        const DEMO_FILE: &str =
            "c TEST\n p  atsp 3 \n0 1 2\nc TEST\n3 0 5\n6 7 0";
        let matrix = GraphMatrix::try_read_atsp(DEMO_FILE.as_bytes()).unwrap();

        assert_eq!(matrix.number_of_vertices(), 3);
        assert_eq!(matrix.optimum(), None);
        assert_eq!(matrix.weight(0, 1), 1);
        assert_eq!(matrix.weight(1, 2), 5);
        assert_eq!(matrix.weight(2, 1), 7);
    }

    #[test]
    fn test_optimum_in_header() {
        const DEMO_FILE: &str = "p atsp 2 8\n0 3\n5 0\n";
        let matrix = GraphMatrix::try_read_atsp(DEMO_FILE.as_bytes()).unwrap();

        assert_eq!(matrix.optimum(), Some(8));
        assert_eq!(matrix.weight(1, 0), 5);
    }

    #[test]
    fn test_scenario_instance_file() {
        let matrix = GraphMatrix::try_read_atsp_file("instances/tiny04.atsp").unwrap();

        assert_eq!(matrix.number_of_vertices(), 4);
        assert_eq!(matrix.optimum(), Some(35));
        assert_eq!(matrix.weight(0, 3), 20);
        assert_eq!(matrix.weight(3, 0), 8);
    }

    #[test]
    fn test_invalid() {
        let attempts = [
            "",                             // no header
            "p ds 2\n0 1\n1 0\n",           // wrong file type
            "p atsp\n",                     // missing vertex count
            "p atsp 0\n",                   // empty instance
            "p atsp two\n0 1\n1 0\n",       // unparsable vertex count
            "p atsp 2 x\n0 1\n1 0\n",       // unparsable optimum
            "p atsp 2 8 9\n0 1\n1 0\n",     // trailing header token
            "p atsp 2\n0 1\n",              // missing row
            "p atsp 2\n0 1 2\n1 0\n",       // row too long
            "p atsp 2\n0 -1\n1 0\n",        // negative weight
        ];

        for data in attempts {
            assert!(
                GraphMatrix::try_read_atsp(data.as_bytes()).is_err(),
                "accepted: {data:?}"
            );
        }
    }
}
