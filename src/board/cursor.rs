/// The selected board and page. Only the board controller moves it.
///
/// The board is tracked by its position in the board set; the key is kept
/// alongside for display. Keys of folders with non-UTF-8 names are rendered
/// lossily and may collide, positions never do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    board: usize,
    board_key: String,
    page: usize,
}

impl Cursor {
    pub(super) fn new(board: usize, board_key: String) -> Self {
        Self {
            board,
            board_key,
            page: 0,
        }
    }

    pub fn board(&self) -> usize {
        self.board
    }

    pub fn board_key(&self) -> &str {
        &self.board_key
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub(super) fn select(&mut self, board: usize, board_key: String) {
        self.board = board;
        self.board_key = board_key;
        self.page = 0;
    }

    pub(super) fn set_page(&mut self, page: usize) {
        self.page = page;
    }
}
