use serde::Serialize;

/// A named rank reached once total experience crosses `threshold`.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Tier {
    pub threshold: i64,
    pub title: &'static str,
    pub message: &'static str,
    /// Position in the table counting from the lowest tier. Higher is better.
    pub rank: usize,
}

/// Ordered from the highest threshold to the lowest. Lookup walks it top down.
pub static TIERS: [Tier; 13] = [
    Tier {
        threshold: 300000,
        title: "Goat",
        message: "你简直就是自律界的Faker!!!",
        rank: 12,
    },
    Tier {
        threshold: 150000,
        title: "顶尖职业",
        message: "太强辣！你正在迈向自律界的山巅！！",
        rank: 11,
    },
    Tier {
        threshold: 100000,
        title: "职业",
        message: "顶中顶！你是自律界中0.001%的强者！",
        rank: 10,
    },
    Tier {
        threshold: 60000,
        title: "王者",
        message: "how new bee，你已经达到了普通自律者的极限！",
        rank: 9,
    },
    Tier {
        threshold: 35000,
        title: "宗师",
        message: "不要停下，你即将叩响自律界的王者大门！",
        rank: 8,
    },
    Tier {
        threshold: 20000,
        title: "大师",
        message: "自律超神！但在自律界的Faker眼里还是菜鸟哦！",
        rank: 7,
    },
    Tier {
        threshold: 10000,
        title: "钻石",
        message: "继续加油！你是自律界数一数二的佼佼者！",
        rank: 6,
    },
    Tier {
        threshold: 5000,
        title: "翡翠",
        message: "厉害厉害！你离自律界的天堑仅有一步之遥！",
        rank: 5,
    },
    Tier {
        threshold: 2000,
        title: "铂金",
        message: "你是极其出色的自律者！继续保持这份毅力哦！",
        rank: 4,
    },
    Tier {
        threshold: 1200,
        title: "黄金",
        message: "太优秀了！自律已经成为你的好习惯啦！",
        rank: 3,
    },
    Tier {
        threshold: 500,
        title: "白银",
        message: "很棒！你的自律性已经超过不少人了~",
        rank: 2,
    },
    Tier {
        threshold: 100,
        title: "黄铜",
        message: "已经入门啦，继续积累经验向更高等级前进！",
        rank: 1,
    },
    Tier {
        threshold: 0,
        title: "黑铁",
        message: "刚开始没关系，坚持完成任务就能升级！",
        rank: 0,
    },
];

/// Returns the tier for a total, or `None` when the total is negative. Negative totals are
/// classified by [Severity] instead.
pub fn tier_for(total: i64) -> Option<&'static Tier> {
    TIERS.iter().find(|tier| total >= tier.threshold)
}

/// Returns the tier directly above `tier`, if there is one.
pub fn next_tier(tier: &Tier) -> Option<&'static Tier> {
    TIERS.iter().find(|v| v.rank == tier.rank + 1)
}

/// How bad a negative experience total is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Light,
    Medium,
    Heavy,
}

impl Severity {
    /// Returns `None` for non-negative totals.
    pub fn for_total(total: i64) -> Option<Severity> {
        match total {
            -200..=-1 => Some(Severity::Light),
            -1000..=-201 => Some(Severity::Medium),
            i64::MIN..=-1001 => Some(Severity::Heavy),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{next_tier, tier_for, Severity, TIERS};

    #[test]
    fn table_is_sorted_and_ranked() {
        for pair in TIERS.windows(2) {
            assert!(pair[0].threshold > pair[1].threshold);
            assert_eq!(pair[0].rank, pair[1].rank + 1);
        }
        assert_eq!(TIERS.last().unwrap().threshold, 0);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(tier_for(0).unwrap().title, "黑铁");
        assert_eq!(tier_for(99).unwrap().title, "黑铁");
        assert_eq!(tier_for(100).unwrap().title, "黄铜");
        assert_eq!(tier_for(1199).unwrap().title, "白银");
        assert_eq!(tier_for(1200).unwrap().title, "黄金");
        assert_eq!(tier_for(299_999).unwrap().title, "顶尖职业");
        assert_eq!(tier_for(300_000).unwrap().title, "Goat");
        assert_eq!(tier_for(i64::MAX).unwrap().title, "Goat");
        assert!(tier_for(-1).is_none());
    }

    #[test]
    fn tier_lookup_is_monotonic() {
        let mut previous_rank = 0;
        let mut total = 0;
        while total <= 320_000 {
            let rank = tier_for(total).unwrap().rank;
            assert!(rank >= previous_rank, "rank dropped at {total}");
            previous_rank = rank;
            total += 50;
        }
    }

    #[test]
    fn next_tier_walks_up() {
        let bronze = tier_for(150).unwrap();
        assert_eq!(next_tier(bronze).unwrap().title, "白银");
        assert!(next_tier(tier_for(400_000).unwrap()).is_none());
    }

    #[test]
    fn severity_bands() {
        assert_eq!(Severity::for_total(0), None);
        assert_eq!(Severity::for_total(-1), Some(Severity::Light));
        assert_eq!(Severity::for_total(-200), Some(Severity::Light));
        assert_eq!(Severity::for_total(-201), Some(Severity::Medium));
        assert_eq!(Severity::for_total(-1000), Some(Severity::Medium));
        assert_eq!(Severity::for_total(-1001), Some(Severity::Heavy));
        assert_eq!(Severity::for_total(i64::MIN), Some(Severity::Heavy));
    }
}
