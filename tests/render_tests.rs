use naval_placement::{render_board, write_board, Board, Orientation};

const EMPTY: &str = concat!(
    "  0 1 2 3 4 5 6 7 8 9 \n",
    "----------------------\n",
    "0|0 0 0 0 0 0 0 0 0 0 \n",
    "1|0 0 0 0 0 0 0 0 0 0 \n",
    "2|0 0 0 0 0 0 0 0 0 0 \n",
    "3|0 0 0 0 0 0 0 0 0 0 \n",
    "4|0 0 0 0 0 0 0 0 0 0 \n",
    "5|0 0 0 0 0 0 0 0 0 0 \n",
    "6|0 0 0 0 0 0 0 0 0 0 \n",
    "7|0 0 0 0 0 0 0 0 0 0 \n",
    "8|0 0 0 0 0 0 0 0 0 0 \n",
    "9|0 0 0 0 0 0 0 0 0 0 \n",
);

const FLEET: &str = concat!(
    "  0 1 2 3 4 5 6 7 8 9 \n",
    "----------------------\n",
    "0|0 0 0 0 0 0 0 0 0 0 \n",
    "1|0 0 0 0 0 0 0 0 0 0 \n",
    "2|0 0 0 3 3 3 0 0 0 0 \n",
    "3|0 0 0 0 0 0 0 0 0 0 \n",
    "4|0 0 0 0 0 0 0 0 0 0 \n",
    "5|0 0 0 0 0 0 3 0 0 0 \n",
    "6|0 0 0 0 0 0 3 0 0 0 \n",
    "7|0 0 0 0 0 0 3 0 0 0 \n",
    "8|0 0 0 0 0 0 0 0 0 0 \n",
    "9|0 0 0 0 0 0 0 0 0 0 \n",
);

#[test]
fn test_render_empty_board() {
    assert_eq!(render_board(&Board::new()), EMPTY);
}

#[test]
fn test_render_fleet() {
    let mut board = Board::new();
    board.place(2, 3, Orientation::Horizontal).unwrap();
    board.place(5, 6, Orientation::Vertical).unwrap();
    assert_eq!(render_board(&board), FLEET);
    assert_eq!(board.to_string(), FLEET);
}

#[test]
fn test_header_and_separator_widths() {
    let text = render_board(&Board::new());
    let mut lines = text.lines();
    let header = lines.next().unwrap();
    let separator = lines.next().unwrap();
    assert_eq!(header.len(), 2 + 2 * 10);
    assert_eq!(separator.len(), 2 * 11);
    assert!(separator.chars().all(|c| c == '-'));
    assert_eq!(lines.count(), 10);
}

#[test]
fn test_write_board_appends() {
    let mut out = String::from("board:\n");
    write_board(&Board::new(), &mut out).unwrap();
    assert_eq!(out, format!("board:\n{}", EMPTY));
}
