//! Turns tracker results into the text printed by the cli.

use ansi_term::Colour;

use crate::{
    scoring::{
        messages::Occasion, tiers::next_tier, Assessment, CheckInOutcome, Gain, ScoringConfig,
        StreakStatus,
    },
    storage::entities::TaskList,
    tracker::ExperienceReport,
};

use super::status::Status;

const TEAL: Colour = Colour::RGB(41, 153, 148);

/// Applies colours unless disabled.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub enabled: bool,
}

impl Palette {
    pub fn paint(&self, colour: Colour, text: &str) -> String {
        if self.enabled {
            colour.paint(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str) -> String {
        if self.enabled {
            ansi_term::Style::new().bold().paint(text).to_string()
        } else {
            text.to_string()
        }
    }
}

pub fn render_tasks(tasks: &TaskList, palette: Palette) -> String {
    if tasks.is_empty() {
        return "当前无今日任务".into();
    }
    format!(
        "{}\n{tasks}",
        palette.bold(&format!("今日共要完成{}项任务：", tasks.len()))
    )
}

pub fn render_tasks_saved(tasks: &TaskList, palette: Palette) -> String {
    format!(
        "{}\n{tasks}",
        palette.paint(Colour::Green, "今日任务已更新，任务如下：")
    )
}

pub fn render_check_in(
    outcome: &CheckInOutcome,
    config: &ScoringConfig,
    palette: Palette,
) -> String {
    let target = config.target_task_count;
    let streak = outcome.new_streak;

    let streak_line = match outcome.streak_status {
        StreakStatus::Met => palette.paint(
            Colour::Green,
            "✅ 任务数达标，当前连续未达标次数已重置为 0",
        ),
        StreakStatus::Warning => palette.paint(
            Colour::Yellow,
            &format!(
                "任务数小于{target}，连续次数：{streak}/{}",
                config.max_continuous_unmet
            ),
        ),
        StreakStatus::Penalized => palette.paint(
            Colour::Red,
            &format!(
                "任务数小于{target}，当前连续不达标次数：{streak}\n\
                 🚨 警告！你已连续{streak}天每日完成任务数不足{target}个，要加油啦！🚨\n\
                 由于您多次未完成足量任务，扣除{}点经验！",
                outcome.penalty
            ),
        ),
    };

    let delta = outcome.delta;
    let gain_line = match outcome.gain {
        Gain::Loss => palette.paint(
            Colour::Red,
            &format!("您今日获得的经验为负数：{delta}点，请好好反省！"),
        ),
        Gain::Nothing => "您今天没有获得任何经验。请于明日继续努力！".to_string(),
        Gain::Earned => palette.paint(
            Colour::Green,
            &format!("恭喜您，您今天获得{delta}点经验！"),
        ),
    };
    let standing = match &outcome.assessment {
        Assessment::Tier { tier } => format!(
            "您当前的称号是：\"{}级\"自律者！\n{}\n当前总经验：{}点",
            palette.bold(tier.title),
            tier.message,
            outcome.new_total
        ),
        negative => render_negative(outcome.new_total, negative, Occasion::CheckIn, palette),
    };
    format!("{streak_line}\n{gain_line}\n\n{standing}")
}

pub fn render_experience(report: &ExperienceReport, palette: Palette) -> String {
    match &report.assessment {
        Assessment::Tier { tier } => {
            let mut out = format!(
                "当前经验值：{}点\n当前称号：{}级自律者\n{}",
                report.total,
                palette.bold(tier.title),
                tier.message
            );
            if let Some(next) = next_tier(tier) {
                out.push_str(&format!(
                    "\n距离下一称号「{}」还差{}点",
                    next.title,
                    next.threshold - report.total
                ));
            }
            out
        }
        negative => render_negative(report.total, negative, Occasion::Review, palette),
    }
}

fn render_negative(
    total: i64,
    assessment: &Assessment,
    occasion: Occasion,
    palette: Palette,
) -> String {
    let Assessment::Negative {
        message,
        easter_egg,
        ..
    } = assessment
    else {
        return String::new();
    };
    let mut out = format!(
        "{}\n{}\n{}：{total}点（{}）\n\n{}\n\n{}",
        palette.paint(Colour::Red, &format!("摆烂警告 | 经验负数{total}点")),
        palette.paint(Colour::Red, occasion.headline()),
        occasion.total_label(),
        occasion.remark(),
        palette.paint(Colour::Red, message),
        occasion.closing()
    );
    if let Some(egg) = easter_egg {
        out.push_str("\n\n");
        out.push_str(&palette.paint(Colour::Yellow, egg));
    }
    out
}

pub fn render_streak(streak: u32) -> String {
    format!("您当前的连续不达标次数为：{streak}次")
}

pub fn render_status(status: &Status, palette: Palette) -> String {
    format!(
        "当前时间：{} (UTC{})\n距离今天结束还有：{} 小时 {} 分钟\n{}",
        status.local_time,
        status.utc_offset,
        status.hours_left,
        status.minutes_left,
        palette.paint(Colour::Red, status.encouragement)
    )
}

pub fn render_rules(config: &ScoringConfig, palette: Palette) -> String {
    let target = config.target_task_count;
    let max = config.max_continuous_unmet;
    let per_task = config.experience_per_task;
    let penalty = config.experience_penalty;
    let text = format!(
        "【使用方法】\n\
         1. 设定/重置今日任务：zilv tasks set 看书，跑步，学习（中文/英文逗号分隔均可）\n\
         2. 今日打卡：zilv check-in <完成数>（0-总任务数），系统会自动计算经验值\n\
         3. 查看经验值：zilv experience，查看当前总经验和对应的自律称号，经验为负时会触发趣味提醒\n\
         4. 查看连续不达标次数：zilv streak\n\
         \n\
         【惩罚规则】\n\
         1. 达标任务数：{target}个（每日完成任务数≥此数即为达标）\n\
         2. 连续不达标计数：每日完成任务数＜{target}个时，连续不达标次数+1\n\
         3. 最大连续不达标次数：{max}次\n   \
            - 连续不达标＜{max}次：仅提示当前连续次数\n   \
            - 连续不达标≥{max}次：扣除{penalty}点经验/天\n\
         4. 经验计算规则：\n   \
            - 基础经验：完成任务数 × {per_task}点/个\n   \
            - 惩罚扣减：连续不达标超限时，每日扣除{penalty}点经验\n   \
            - 经验为负：触发不同等级的趣味提醒，督促你恢复自律！"
    );
    palette.paint(TEAL, &text)
}
