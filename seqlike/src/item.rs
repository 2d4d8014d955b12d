use std::fmt;
use std::rc::Rc;

/// An item is one element of a sequence that mixes element types.
///
/// The widening operations of [`SequenceKind`](crate::SequenceKind) produce
/// a sequence of any type both inputs convert into; `Item` is the closed
/// union used for that: an integer, a string or a boolean.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Item {
    Integer(i64),
    String(Rc<str>),
    Boolean(bool),
}

// an item should stay as small as a fat pointer plus a tag
#[cfg(target_arch = "x86_64")]
static_assertions::assert_eq_size!(Item, [u8; 24]);

impl Item {
    pub fn to_integer(&self) -> Option<i64> {
        match self {
            Item::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn to_str(&self) -> Option<&str> {
        match self {
            Item::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn to_bool(&self) -> Option<bool> {
        match self {
            Item::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<i64> for Item {
    fn from(i: i64) -> Self {
        Item::Integer(i)
    }
}

impl From<i32> for Item {
    fn from(i: i32) -> Self {
        Item::Integer(i.into())
    }
}

impl From<&str> for Item {
    fn from(s: &str) -> Self {
        Item::String(s.into())
    }
}

impl From<String> for Item {
    fn from(s: String) -> Self {
        Item::String(s.into())
    }
}

impl From<Rc<str>> for Item {
    fn from(s: Rc<str>) -> Self {
        Item::String(s)
    }
}

impl From<bool> for Item {
    fn from(b: bool) -> Self {
        Item::Boolean(b)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Integer(i) => write!(f, "{}", i),
            Item::String(s) => write!(f, "{:?}", s),
            Item::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// Render items the way the sequences are written in test output:
/// `[1, 2, "a"]`.
pub fn display_items(items: &[Item]) -> String {
    let rendered = items.iter().map(|item| item.to_string()).collect::<Vec<_>>();
    format!("[{}]", rendered.join(", "))
}
