use mockall::mock;
use trellis_core::TrellisResult;
use trellis_domain::{Board, Card, List};
use trellis_persistence::BoardStore;

mock! {
    pub Store {}

    #[async_trait::async_trait]
    impl BoardStore for Store {
        async fn load(&self) -> TrellisResult<Board>;
        async fn save(&self, board: &Board) -> TrellisResult<()>;
    }
}

/// Two lists: "list-a" holding c1/c2, "list-b" empty.
pub fn board_two_lists() -> Board {
    let mut board = Board::new();
    let mut a = List::with_id("list-a", "A".to_string());
    a.cards.push(Card::with_id("c1", "One".to_string()));
    a.cards.push(Card::with_id("c2", "Two".to_string()));
    board.lists.push(a);
    board.lists.push(List::with_id("list-b", "B".to_string()));
    board
}
