//! Flavor text. Kept apart from the scoring rules so the tables can be edited without touching
//! the arithmetic.

use super::tiers::Severity;

pub const ENCOURAGEMENTS: [&str; 10] = [
    "自律的苦轻如鸿毛，后悔的痛重如泰山 ⛰️",
    "今天的坚持，是明天的底气 ✊",
    "不必万丈光芒，但请始终温暖有光 ✨",
    "自律不是咬牙坚持，而是习惯成自然 🧩",
    "你多一份自律，生活就多一份自由 🎈",
    "慢慢来，谁还没有一个努力的过程 🚶",
    "坚持的意义，在于让平凡的日子闪着光 ✨",
    "当下的每一次努力，都是未来的伏笔 📝",
    "自律的最高境界：忙而不慌，累而不丧 💪",
    "你想要的，都藏在你的坚持里 🌟",
];

const LIGHT_SCOLDINGS: [&str; 5] = [
    "😅 兄弟，经验都负了还摆烂？生产队的驴都没你能歇！",
    "🤡 就这？就这？经验都干成负数了，还好意思摸鱼？",
    "💤 建议你直接把自律管理器卸了，反正也不做任务~",
    "🍵 哟，经验负数的“摆烂大师”，今日功德-10086！",
    "🚶 跑起来啊！经验都倒欠了，还搁这儿散步呢？",
];

const MEDIUM_SCOLDINGS: [&str; 5] = [
    "💥 完了完了，经验负几百了，你是反向自律是吧？",
    "🔥 别人涨经验你掉经验，你这是在给自律界拖后腿啊！",
    "🤑 经验都负成这样了，是不是得给系统交“摆烂税”？",
    "👊 再摆烂下去，你的称号都要变成“入土级”了！",
    "🎮 打游戏都知道刷经验，自律咋就不学学？负成这样了！",
];

const HEAVY_SCOLDINGS: [&str; 5] = [
    "💀 逆天！经验负上千了，你是要创个“反向自律吉尼斯”？",
    "🌋 火山喷发级摆烂！经验负成这样，系统都想拉黑你！",
    "🚀 别人自律升级，你自律降级，直接负到外太空了？",
    "👻 建议改名叫“摆烂鬼”，经验负数比阎王爷的账本还离谱！",
    "🤯 我服了！经验负成这样，你是不是和自律有仇？！",
];

pub fn scoldings(severity: Severity) -> &'static [&'static str] {
    match severity {
        Severity::Light => &LIGHT_SCOLDINGS,
        Severity::Medium => &MEDIUM_SCOLDINGS,
        Severity::Heavy => &HEAVY_SCOLDINGS,
    }
}

/// Totals strictly below this get an extra easter egg line.
pub const EASTER_EGG_BELOW: i64 = -2000;

/// Where a negative total is being shown. The wording differs slightly between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occasion {
    CheckIn,
    Review,
}

impl Occasion {
    pub fn easter_egg(self) -> &'static str {
        match self {
            Occasion::CheckIn => "🐣 彩蛋：建议你直接摆到底，反正已经负到没朋友了！",
            Occasion::Review => "🐣 彩蛋：建议你改名为“摆烂之王”，申请专利算了！",
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Occasion::CheckIn => "⚠️ 打卡警告！⚠️",
            Occasion::Review => "⚠️ 紧急警告！⚠️",
        }
    }

    pub fn total_label(self) -> &'static str {
        match self {
            Occasion::CheckIn => "打卡后经验值",
            Occasion::Review => "你的经验值",
        }
    }

    pub fn remark(self) -> &'static str {
        match self {
            Occasion::CheckIn => "负麻了！",
            Occasion::Review => "负得离谱！",
        }
    }

    pub fn closing(self) -> &'static str {
        match self {
            Occasion::CheckIn => "👉 明天再不完成任务，系统就要给你发“摆烂证书”了！",
            Occasion::Review => "👉 赶紧去完成任务把经验涨回来，不然系统要拉黑你了！",
        }
    }
}
