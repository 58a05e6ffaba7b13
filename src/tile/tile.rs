use std::fmt;

/// 风牌（东南西北）
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub enum Wind {
    East = 0,
    South = 1,
    West = 2,
    North = 3,
}

impl Wind {
    /// 所有风牌（按序）
    pub fn all() -> [Wind; 4] {
        [Wind::East, Wind::South, Wind::West, Wind::North]
    }

    /// 从序号（0-3）创建
    pub fn from_rank(rank: u8) -> Option<Self> {
        Self::all().get(rank as usize).copied()
    }

    fn label(self) -> &'static str {
        match self {
            Wind::East => "东",
            Wind::South => "南",
            Wind::West => "西",
            Wind::North => "北",
        }
    }
}

/// 箭牌（中发白）
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub enum Dragon {
    Red = 0,
    Green = 1,
    White = 2,
}

impl Dragon {
    /// 所有箭牌（按序）
    pub fn all() -> [Dragon; 3] {
        [Dragon::Red, Dragon::Green, Dragon::White]
    }

    /// 从序号（0-2）创建
    pub fn from_rank(rank: u8) -> Option<Self> {
        Self::all().get(rank as usize).copied()
    }

    fn label(self) -> &'static str {
        match self {
            Dragon::Red => "中",
            Dragon::Green => "发",
            Dragon::White => "白",
        }
    }
}

/// 麻将牌类型
///
/// 使用 136 张牌：万、条、筒各 36 张（1-9 各 4 张），风牌 16 张，箭牌 12 张。
///
/// 排序规则：先按花色（万、条、筒、风、箭），再按点数。
/// 派生的 `Ord` 依赖变体的声明顺序，不要调整。
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub enum Tile {
    /// 万子（1-9）
    Wan(u8),
    /// 条子（1-9）
    Tiao(u8),
    /// 筒子（1-9）
    Tong(u8),
    /// 风牌
    Wind(Wind),
    /// 箭牌
    Dragon(Dragon),
}

impl Tile {
    /// 总牌数：136 张
    pub const TOTAL_COUNT: usize = 136;

    /// 牌的种类数：27 张数牌 + 4 风 + 3 箭
    pub const KIND_COUNT: usize = 34;

    /// 每种牌的张数
    pub const COPIES: u8 = 4;

    /// 数牌的点数范围：1-9
    pub const MIN_RANK: u8 = 1;
    pub const MAX_RANK: u8 = 9;

    /// 创建一张牌，验证输入有效性
    ///
    /// 数牌点数为 1-9，风牌为 0-3（东南西北），箭牌为 0-2（中发白）。
    pub fn new(suit: Suit, rank: u8) -> Option<Self> {
        match suit {
            Suit::Wind => Wind::from_rank(rank).map(Tile::Wind),
            Suit::Dragon => Dragon::from_rank(rank).map(Tile::Dragon),
            _ if !(Self::MIN_RANK..=Self::MAX_RANK).contains(&rank) => None,
            Suit::Wan => Some(Tile::Wan(rank)),
            Suit::Tiao => Some(Tile::Tiao(rank)),
            Suit::Tong => Some(Tile::Tong(rank)),
        }
    }

    /// 获取花色
    pub fn suit(&self) -> Suit {
        match self {
            Tile::Wan(_) => Suit::Wan,
            Tile::Tiao(_) => Suit::Tiao,
            Tile::Tong(_) => Suit::Tong,
            Tile::Wind(_) => Suit::Wind,
            Tile::Dragon(_) => Suit::Dragon,
        }
    }

    /// 获取点数（数牌 1-9，风牌 0-3，箭牌 0-2）
    pub fn rank(&self) -> u8 {
        match self {
            Tile::Wan(r) | Tile::Tiao(r) | Tile::Tong(r) => *r,
            Tile::Wind(w) => *w as u8,
            Tile::Dragon(d) => *d as u8,
        }
    }

    /// 点数是否在该花色的合法范围内
    pub fn is_valid(&self) -> bool {
        Tile::new(self.suit(), self.rank()).is_some()
    }

    /// 转换为种类索引（0-33）
    ///
    /// 映射规则：
    /// - 万子：0-8
    /// - 条子：9-17
    /// - 筒子：18-26
    /// - 风牌：27-30
    /// - 箭牌：31-33
    ///
    /// 不区分具体是哪一张（相同的牌等价）。
    pub fn to_index(&self) -> usize {
        match self {
            Tile::Wan(r) => (*r - 1) as usize,
            Tile::Tiao(r) => 9 + (*r - 1) as usize,
            Tile::Tong(r) => 18 + (*r - 1) as usize,
            Tile::Wind(w) => 27 + *w as usize,
            Tile::Dragon(d) => 31 + *d as usize,
        }
    }

    /// 从种类索引创建牌
    ///
    /// 索引范围：0-33
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0..=8 => Some(Tile::Wan(index as u8 + 1)),
            9..=17 => Some(Tile::Tiao((index - 9) as u8 + 1)),
            18..=26 => Some(Tile::Tong((index - 18) as u8 + 1)),
            27..=30 => Wind::from_rank((index - 27) as u8).map(Tile::Wind),
            31..=33 => Dragon::from_rank((index - 31) as u8).map(Tile::Dragon),
            _ => None,
        }
    }

    /// 所有 34 种牌（按排序规则）
    pub fn all() -> impl Iterator<Item = Tile> {
        (0..Self::KIND_COUNT).filter_map(Tile::from_index)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Wind(w) => write!(f, "{}风", w.label()),
            Tile::Dragon(d) => write!(f, "{}箭", d.label()),
            numbered => write!(f, "{}{}", numbered.rank(), numbered.suit().label()),
        }
    }
}

/// 花色枚举
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub enum Suit {
    Wan = 0,
    Tiao = 1,
    Tong = 2,
    Wind = 3,
    Dragon = 4,
}

impl Suit {
    /// 是否为数牌花色（只有数牌可以组成顺子）
    pub fn is_numbered(self) -> bool {
        matches!(self, Suit::Wan | Suit::Tiao | Suit::Tong)
    }

    /// 花色显示名
    pub fn label(self) -> &'static str {
        match self {
            Suit::Wan => "万",
            Suit::Tiao => "条",
            Suit::Tong => "筒",
            Suit::Wind => "风",
            Suit::Dragon => "箭",
        }
    }
}
