/// 日記エントリのドメインモデル
///
/// エントリIDの生成と、DynamoDB上のキー構造を定義する。
use std::fmt;
use uuid::Uuid;

/// 全エントリが共有するパーティションキーの値
pub const ENTRY_PARTITION: &str = "ENTRY";

/// ソートキーのプレフィックス
pub const ENTRY_SORT_KEY_PREFIX: &str = "ENTRY_ID#";

/// エントリID
///
/// UUIDv7の文字列表現。先頭48ビットがミリ秒単位のUnix時刻のため、
/// 文字列のまま比較しても作成順に並ぶ。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(String);

impl EntryId {
    /// 新しいエントリIDを生成する
    pub fn generate() -> Self {
        Self(Uuid::now_v7().hyphenated().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// DynamoDBのソートキー（`ENTRY_ID#<id>`）を構築
    pub fn sort_key(&self) -> String {
        format!("{}{}", ENTRY_SORT_KEY_PREFIX, self.0)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 日記エントリ
///
/// IDは作成時にハンドラーが一度だけ割り当て、以後変更しない。
/// フィールドを非公開にして生成経路を`JournalEntry::new`に限定している。
#[derive(Debug, Clone, PartialEq)]
pub struct JournalEntry {
    entry_id: EntryId,
    content: String,
}

impl JournalEntry {
    /// 新しいIDを採番してエントリを作成
    pub fn new(content: String) -> Self {
        Self {
            entry_id: EntryId::generate(),
            content,
        }
    }

    pub fn entry_id(&self) -> &EntryId {
        &self.entry_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn partition_key(&self) -> &'static str {
        ENTRY_PARTITION
    }

    pub fn sort_key(&self) -> String {
        self.entry_id.sort_key()
    }
}
