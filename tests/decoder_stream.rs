use proptest::prelude::*;
use rhombus::{FrameDecoder, Matrix, ReaderLines, StopSignal};
use std::io::Cursor;

fn read(rows: usize, cols: usize, lines: &[&str]) -> Option<Matrix> {
    let mut decoder = FrameDecoder::new(rows, cols).unwrap();
    let mut src = ReaderLines::new(Cursor::new(lines.join("\n")));
    decoder.read_matrix(&mut src, &StopSignal::new()).unwrap()
}

#[test]
fn test_one_line_frame() {
    let m = read(2, 2, &["1,2;3,4"]).unwrap();
    assert_eq!(m, Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap());
}

#[test]
fn test_incomplete_stream_yields_nothing() {
    assert_eq!(read(2, 2, &["1,2,3;", "", "5,6"]), None);
}

#[test]
fn test_rectangular_frames() {
    let m = read(2, 3, &["1,2,3", "4,5;4,5,6"]).unwrap();
    assert_eq!((m.rows, m.cols), (2, 3));
    assert_eq!(m.flattened(), &[1, 2, 3, 4, 5, 6]);
}

#[derive(Clone, Debug)]
enum Piece {
    Good(Vec<i64>),
    Short(Vec<i64>),
    Garbage(String),
    Blank,
}

fn piece_strategy(cols: usize) -> impl Strategy<Value = Piece> {
    prop_oneof![
        4 => proptest::collection::vec(-999i64..999, cols).prop_map(Piece::Good),
        1 => proptest::collection::vec(-999i64..999, 1..cols.max(2)).prop_map(Piece::Short),
        1 => "[a-z]{1,4}".prop_map(Piece::Garbage),
        1 => Just(Piece::Blank),
    ]
}

fn join(values: &[i64]) -> String {
    values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",")
}

proptest! {
    /// Well-formed rows come back in order no matter how they are split
    /// across lines or mixed with junk.
    #[test]
    fn well_formed_rows_survive(cols in 2usize..6,
                                pieces in proptest::collection::vec(piece_strategy(5), 0..40),
                                split_every in 1usize..4) {
        let pieces: Vec<Piece> = pieces.into_iter()
                                       .map(|p| match p {
                                           Piece::Good(v) => Piece::Good(v.into_iter().take(cols).collect()),
                                           Piece::Short(v) => Piece::Short(v.into_iter().take(cols - 1).collect()),
                                           other => other,
                                       })
                                       .collect();
        let good: Vec<Vec<i64>> = pieces.iter()
                                        .filter_map(|p| match p {
                                            Piece::Good(v) if v.len() == cols => Some(v.clone()),
                                            _ => None,
                                        })
                                        .collect();
        prop_assume!(!good.is_empty());
        let mut lines = Vec::new();
        for chunk in pieces.chunks(split_every) {
            let records: Vec<String> = chunk.iter()
                                            .filter_map(|p| match p {
                                                Piece::Good(v) | Piece::Short(v) => Some(join(v)),
                                                Piece::Garbage(s) => Some(s.clone()),
                                                Piece::Blank => None,
                                            })
                                            .collect();
            lines.push(records.join(";"));
        }
        let rows = good.len();
        let mut decoder = FrameDecoder::new(rows, cols).unwrap();
        let mut src = ReaderLines::new(Cursor::new(lines.join("\n")));
        let m = decoder.read_matrix(&mut src, &StopSignal::new()).unwrap().unwrap();
        prop_assert_eq!(m, Matrix::from_rows(good).unwrap());
    }
}
