pub mod auction;
pub mod counts;
pub mod io;
pub mod letter;
pub mod table;
pub mod word;

pub use auction::AuctionRecord;
pub use counts::LetterCounts;
pub use letter::Letter;
pub use table::LetterTable;
pub use word::Word;
