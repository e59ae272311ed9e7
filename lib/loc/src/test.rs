use crate::Loc;

#[test]
fn ordering_follows_offsets() {
    let a = Loc::new(3);
    let b = Loc::new(12);

    assert!(a < b);
    assert_eq!(a, Loc::new(3));
    assert_eq!(Loc::dummy(), Loc::new(0));
}

#[test]
fn file_position_counts_lines() {
    let src = "x = 1;\ny = 2;\n\nz = 3;";

    let start = Loc::new(0).file_position(src);
    assert_eq!((start.line, start.col), (1, 1));

    let second_line = Loc::new(11).file_position(src);
    assert_eq!((second_line.line, second_line.col), (2, 5));

    let after_blank = Loc::new(15).file_position(src);
    assert_eq!((after_blank.line, after_blank.col), (4, 1));
}

#[test]
fn display() {
    assert_eq!(Loc::new(42).to_string(), "loc:42");

    let pos = Loc::new(0).file_position("");
    assert_eq!(pos.to_string(), "[1:1]");
}
