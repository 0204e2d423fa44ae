use std::path::PathBuf;

/// 卡号占位符（手机号为空时显示）
pub const NUMBER_PLACEHOLDER: &str = "0000 0000 0000 0000";

/// 姓名占位符
pub const NAME_PLACEHOLDER: &str = "নাম এখানে আসবে...";

/// 卡面固定文案
pub const CARD_BRAND: &str = "বিএনপি সেবা";
pub const CARD_EXPIRY: &str = "12/30";

/// 收入审核阈值（月收入严格大于该值即被拒绝）
pub const INCOME_LIMIT: f64 = 5000.0;

/// 服务卡类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardType {
    Family,
    Agriculture,
    Health,
}

impl CardType {
    /// 全部类别（选择器按此顺序展示）
    pub const ALL: [CardType; 3] = [CardType::Family, CardType::Agriculture, CardType::Health];

    /// 类别对应的卡片标题
    pub fn label(self) -> &'static str {
        match self {
            CardType::Family => "ফ্যামিলি কার্ড",
            CardType::Agriculture => "কৃষি কার্ড",
            CardType::Health => "স্বাস্থ্য কার্ড",
        }
    }
}

/// 卡面主题：三段渐变色（左上 → 中 → 右下）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardTheme {
    pub stops: [(u8, u8, u8); 3],
}

impl CardTheme {
    /// 类别 → 主题，一一对应；未选择时使用默认绿色
    ///
    /// match 穷尽所有类别，新增类别若缺少映射将无法编译。
    pub fn for_card(card_type: Option<CardType>) -> Self {
        let stops = match card_type {
            Some(CardType::Family) => [(0x1e, 0x3a, 0x8a), (0x1e, 0x40, 0xaf), (0x25, 0x63, 0xeb)],
            Some(CardType::Agriculture) => {
                [(0x3f, 0x31, 0x08), (0xa1, 0x62, 0x07), (0xca, 0x8a, 0x04)]
            }
            Some(CardType::Health) => [(0x7f, 0x1d, 0x1d), (0x99, 0x1b, 0x1b), (0xdc, 0x26, 0x26)],
            None => [(0x00, 0x4d, 0x38), (0x00, 0x6a, 0x4e), (0x00, 0x8f, 0x6b)],
        };
        Self { stops }
    }

    /// 渐变中间色（TUI 预览用它作卡片底色）
    pub fn mid(&self) -> (u8, u8, u8) {
        self.stops[1]
    }
}

/// 已解码的用户照片
///
/// 上传时解码一次，表单缩略信息与卡面预览/导出共用同一份值。
#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub source: PathBuf,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// 申请表单（单次会话内的全部用户输入，不做持久化）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationForm {
    pub name: String,
    pub mobile: String,
    pub ward: String,
    pub income: String,
    pub card_type: Option<CardType>,
    pub photo: Option<Photo>,
}

/// 审核结论（每次提交整体替换，生成后不再修改）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeDecision {
    pub accepted: bool,
    pub title: &'static str,
    pub message: &'static str,
}

/// 收入审核
///
/// 解析失败按 NaN 处理，NaN 与阈值比较为 false，因此空值/非数字
/// 一律走通过分支。
pub fn evaluate_income(income: &str) -> OutcomeDecision {
    let value: f64 = income.trim().parse().unwrap_or(f64::NAN);

    if value > INCOME_LIMIT {
        OutcomeDecision {
            accepted: false,
            title: "ও ভাই, আপনি তো নিজেই ডোনার!",
            message: "আল্লাহর রহমতে আপনার অনেক আছে। দলের ফাণ্ডে কিছু চান্দা দেন, কার্ডের আশা বাদ দেন। দেশ বাঁচাতে আগে ত্যাগ স্বীকার করুন! 🌾",
        }
    } else {
        OutcomeDecision {
            accepted: true,
            title: "আবেদন গৃহীত হয়েছে",
            message: "স্বাগতম! আপনার আবেদনটি হাই-কমান্ডের অনুমোদনের জন্য পাঠানো হলো। চান্দা দিয়ে ধানের শীষের সাথেই থাকুন।",
        }
    }
}

/// 格式化卡号：用手机号模拟 16 位卡号
///
/// 去掉非数字字符；为空时返回占位符。否则前缀国家码 880，
/// 右侧补 0 至 16 位（超长在 16 位处截断，多余尾部数字直接丢弃），
/// 每 4 位用空格分组。
pub fn format_card_number(mobile: &str) -> String {
    let digits: String = mobile.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return NUMBER_PLACEHOLDER.to_string();
    }

    let mut full = format!("880{digits}");
    while full.len() < 16 {
        full.push('0');
    }
    full.truncate(16);

    full.as_bytes()
        .chunks(4)
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" ")
}

/// 卡面视图：表单的纯投影
///
/// 每次绘制时从当前表单重新计算，无缓存、无独立状态。
#[derive(Debug, Clone, PartialEq)]
pub struct CardFace<'a> {
    pub theme: CardTheme,
    pub label: &'static str,
    pub number: String,
    pub holder: &'a str,
    pub photo: Option<&'a Photo>,
}

impl<'a> CardFace<'a> {
    pub fn project(form: &'a ApplicationForm) -> Self {
        let label = match form.card_type {
            Some(card) => card.label(),
            None => "সদস্য কার্ড",
        };
        let holder = if form.name.is_empty() {
            NAME_PLACEHOLDER
        } else {
            form.name.as_str()
        };

        Self {
            theme: CardTheme::for_card(form.card_type),
            label,
            number: format_card_number(&form.mobile),
            holder,
            photo: form.photo.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_income_boundary() {
        // 只有严格大于阈值才拒绝
        assert!(evaluate_income("5000").accepted);
        assert!(!evaluate_income("5001").accepted);
        assert!(!evaluate_income("5000.5").accepted);
    }

    #[test]
    fn test_evaluate_income_nan_accepts() {
        // NaN 比较为 false，空值/非数字走通过分支
        assert!(evaluate_income("").accepted);
        assert!(evaluate_income("abc").accepted);
        assert!(evaluate_income("-100").accepted);
    }

    #[test]
    fn test_evaluate_income_messages() {
        assert_eq!(evaluate_income("3000").title, "আবেদন গৃহীত হয়েছে");
        assert_eq!(
            evaluate_income("999999").title,
            "ও ভাই, আপনি তো নিজেই ডোনার!"
        );
    }

    #[test]
    fn test_format_card_number_empty() {
        assert_eq!(format_card_number(""), NUMBER_PLACEHOLDER);
        assert_eq!(format_card_number("+- "), NUMBER_PLACEHOLDER);
    }

    #[test]
    fn test_format_card_number_pads_to_16() {
        // 880 + 11 位手机号 = 14 位，再补两个 0
        assert_eq!(format_card_number("01712345678"), "8800 1712 3456 7800");
    }

    #[test]
    fn test_format_card_number_truncates_to_16() {
        // 超长号码在 16 位处截断，尾部数字丢弃
        assert_eq!(
            format_card_number("0171234567890123456"),
            "8800 1712 3456 7890"
        );
    }

    #[test]
    fn test_format_card_number_strips_non_digits() {
        assert_eq!(format_card_number("017-1234 5678"), "8800 1712 3456 7800");
    }

    #[test]
    fn test_theme_mapping_is_stable() {
        for card in CardType::ALL {
            assert_eq!(
                CardTheme::for_card(Some(card)),
                CardTheme::for_card(Some(card))
            );
        }
        assert_eq!(CardTheme::for_card(None).stops[1], (0x00, 0x6a, 0x4e));
        assert_eq!(
            CardTheme::for_card(Some(CardType::Family)).stops[0],
            (0x1e, 0x3a, 0x8a)
        );
        assert_eq!(
            CardTheme::for_card(Some(CardType::Health)).stops[2],
            (0xdc, 0x26, 0x26)
        );
    }

    #[test]
    fn test_card_face_projection() {
        let mut form = ApplicationForm::default();
        let face = CardFace::project(&form);
        assert_eq!(face.holder, NAME_PLACEHOLDER);
        assert_eq!(face.label, "সদস্য কার্ড");
        assert_eq!(face.number, NUMBER_PLACEHOLDER);
        assert!(face.photo.is_none());

        form.name = "Rahim".to_string();
        form.card_type = Some(CardType::Agriculture);
        let face = CardFace::project(&form);
        assert_eq!(face.holder, "Rahim");
        assert_eq!(face.label, "কৃষি কার্ড");
    }

    #[test]
    fn test_card_face_shares_photo() {
        let photo = Photo {
            source: PathBuf::from("/tmp/me.png"),
            width: 2,
            height: 2,
            rgba: vec![0; 16],
        };
        let form = ApplicationForm {
            photo: Some(photo.clone()),
            ..Default::default()
        };
        // 表单缩略与卡面引用同一份照片值
        let face = CardFace::project(&form);
        assert_eq!(face.photo, Some(&photo));
    }
}
