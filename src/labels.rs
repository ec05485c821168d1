//! Static UI label strings.

use std::str::FromStr;

use thiserror::Error;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Ja,
}

impl Lang {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ja => "ja",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language `{0}` (expected `en` or `ja`)")]
pub struct UnknownLang(pub String);

impl FromStr for Lang {
    type Err = UnknownLang;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ja" => Ok(Self::Ja),
            _ => Err(UnknownLang(s.to_string())),
        }
    }
}

/// Every user-visible string on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub title: &'static str,
    pub placeholder: &'static str,
    pub add: &'static str,
    pub update: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub empty_list: &'static str,
    pub mode_add: &'static str,
    pub mode_edit: &'static str,
    pub items: &'static str,
    pub added: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub help_title: &'static str,
}

pub const EN: Labels = Labels {
    title: "Todo List",
    placeholder: "Add a new todo",
    add: "Add",
    update: "Update",
    edit: "Edit",
    delete: "Delete",
    empty_list: "Nothing to do yet",
    mode_add: "ADD",
    mode_edit: "EDIT",
    items: "items",
    added: "Added",
    updated: "Updated",
    deleted: "Deleted",
    help_title: "Help",
};

pub const JA: Labels = Labels {
    title: "Todoリスト",
    placeholder: "新しいTodoを追加",
    add: "追加",
    update: "更新",
    edit: "編集",
    delete: "削除",
    empty_list: "Todoはまだありません",
    mode_add: "追加",
    mode_edit: "編集中",
    items: "件",
    added: "追加しました",
    updated: "更新しました",
    deleted: "削除しました",
    help_title: "ヘルプ",
};

impl Labels {
    pub const fn for_lang(lang: Lang) -> &'static Self {
        match lang {
            Lang::En => &EN,
            Lang::Ja => &JA,
        }
    }

    /// Label of the primary button for the current mode.
    pub const fn submit(&self, editing: bool) -> &'static str {
        if editing { self.update } else { self.add }
    }
}
