//! Fixed symptom question lists, ten per disease, per language.

use crate::domain::{Disease, Language};

/// The ordered question list for a disease in the given language.
#[must_use]
pub fn questions(disease: Disease, lang: Language) -> &'static [&'static str] {
    match (disease, lang) {
        (Disease::Eyes, Language::English) => EYES_EN,
        (Disease::Eyes, Language::Urdu) => EYES_UR,
        (Disease::Eyes, Language::Sindhi) => EYES_SD,
        (Disease::Breathing, Language::English) => BREATHING_EN,
        (Disease::Breathing, Language::Urdu) => BREATHING_UR,
        (Disease::Breathing, Language::Sindhi) => BREATHING_SD,
        (Disease::Skin, Language::English) => SKIN_EN,
        (Disease::Skin, Language::Urdu) => SKIN_UR,
        (Disease::Skin, Language::Sindhi) => SKIN_SD,
        (Disease::Dengue, Language::English) => DENGUE_EN,
        (Disease::Dengue, Language::Urdu) => DENGUE_UR,
        (Disease::Dengue, Language::Sindhi) => DENGUE_SD,
    }
}

const EYES_EN: &[&str] = &[
    "Do you experience redness in your eyes?",
    "Do you have excessive tearing or watery eyes?",
    "Do you feel itching or burning sensation in your eyes?",
    "Do you have blurred or decreased vision?",
    "Are your eyes sensitive to light?",
    "Do you experience eye discharge or crusting?",
    "Do you have swollen eyelids?",
    "Do you feel a foreign body sensation in your eyes?",
    "Have you noticed any changes in your eye color?",
    "Do you experience eye pain or discomfort?",
];

const EYES_UR: &[&str] = &[
    "کیا آپ کی آنکھیں سرخ ہیں؟",
    "کیا آپ کی آنکھوں سے زیادہ پانی بہتا ہے؟",
    "کیا آپ کو آنکھوں میں خارش یا جلن محسوس ہوتی ہے؟",
    "کیا آپ کی نظر دھندلی یا کمزور ہے؟",
    "کیا آپ کی آنکھیں روشنی کے لیے حساس ہیں؟",
    "کیا آپ کی آنکھوں سے خارج ہونے والا مادہ یا کرسٹنگ ہے؟",
    "کیا آپ کی پلکیں سوجی ہوئی ہیں؟",
    "کیا آپ کو آنکھوں میں کوئی غیر ملکی چیز کا احساس ہوتا ہے؟",
    "کیا آپ نے اپنی آنکھ کے رنگ میں کوئی تبدیلی محسوس کی ہے؟",
    "کیا آپ کو آنکھوں میں درد یا تکلیف محسوس ہوتی ہے؟",
];

const EYES_SD: &[&str] = &[
    "ڇا توهان جي اکين ۾ ڳاڙهائي آهي؟",
    "ڇا توهان جي اکين مان وڌيڪ پاڻي نڪري ٿو؟",
    "ڇا توهان کي اکين ۾ خارش يا ساڙ محسوس ٿئي ٿي؟",
    "ڇا توهان جي نظر دھندلي يا گهٽ آهي؟",
    "ڇا توهان جي اکين روشني لاءِ حساس آهن؟",
    "ڇا توهان جي اکين مان خارج ٿيندڙ مادو يا ڪرسٽنگ آهي؟",
    "ڇا توهان جي پلڪون سوجيل آهن؟",
    "ڇا توهان کي اکين ۾ غير ملڪي شيءِ جو احساس ٿئي ٿو؟",
    "ڇا توهان پنھنجي اک جي رنگ ۾ تبديلي محسوس ڪئي آهي؟",
    "ڇا توهان کي اکين ۾ درد يا تڪليف محسوس ٿئي ٿي؟",
];

const BREATHING_EN: &[&str] = &[
    "Do you experience shortness of breath?",
    "Do you have a persistent cough?",
    "Do you feel chest tightness or pressure?",
    "Do you experience wheezing or whistling sounds when breathing?",
    "Do you have difficulty breathing during physical activity?",
    "Do you wake up at night due to breathing problems?",
    "Do you experience rapid or shallow breathing?",
    "Do you have a runny or stuffy nose?",
    "Do you feel tired or fatigued easily?",
    "Do you experience chest pain when breathing?",
];

const BREATHING_UR: &[&str] = &[
    "کیا آپ کو سانس لینے میں دشواری ہوتی ہے؟",
    "کیا آپ کو مستقل کھانسی ہے؟",
    "کیا آپ کو سینے میں تنگی یا دباؤ محسوس ہوتا ہے؟",
    "کیا آپ کو سانس لیتے وقت سیٹی یا سانس کی آوازیں آتی ہیں؟",
    "کیا آپ کو جسمانی سرگرمی کے دوران سانس لینے میں دشواری ہوتی ہے؟",
    "کیا آپ رات کو سانس کی پریشانی کی وجہ سے جاگتے ہیں؟",
    "کیا آپ کو تیز یا سطحی سانس لینا پڑتا ہے؟",
    "کیا آپ کی ناک بہتی یا بند ہے؟",
    "کیا آپ آسانی سے تھک جاتے ہیں یا تھکاوٹ محسوس کرتے ہیں؟",
    "کیا آپ کو سانس لیتے وقت سینے میں درد ہوتا ہے؟",
];

const BREATHING_SD: &[&str] = &[
    "ڇا توهان کي ساهه وٺڻ ۾ مشڪلات آهي؟",
    "ڇا توهان کي مستقل کھانسي آهي؟",
    "ڇا توهان کي سيني ۾ تنگي يا دٻاءُ محسوس ٿئي ٿو؟",
    "ڇا توهان کي ساهه وٺندي وقت سيٽي يا ساهه جي آوازون اينديون آهن؟",
    "ڇا توهان کي جسماني سرگرمي دوران ساهه وٺڻ ۾ مشڪلات آهي؟",
    "ڇا توهان رات کي ساهه جي پريشاني جي ڪري جاڳندا آهيو؟",
    "ڇا توهان کي تيز يا سطحي ساهه وٺڻو پوندو آهي؟",
    "ڇا توهان جي نڪ بہندي يا بند آهي؟",
    "ڇا توهان آساني سان ٿڪجي وڃو ٿا يا ٿڪاوٽ محسوس ڪندا آهيو؟",
    "ڇا توهان کي ساهه وٺندي وقت سيني ۾ درد ٿئي ٿو؟",
];

const SKIN_EN: &[&str] = &[
    "Do you have any rashes or red patches on your skin?",
    "Do you experience itching or irritation on your skin?",
    "Do you have dry or flaky skin?",
    "Do you notice any bumps, blisters, or sores?",
    "Do you have skin discoloration or dark spots?",
    "Is your skin sensitive to touch or pressure?",
    "Do you experience burning or stinging sensation?",
    "Do you have excessive sweating or oiliness?",
    "Have you noticed any changes in skin texture?",
    "Do you have any open wounds or cuts that are not healing?",
];

const SKIN_UR: &[&str] = &[
    "کیا آپ کی جلد پر کوئی خارش یا سرخ دھبے ہیں؟",
    "کیا آپ کو جلد پر خارش یا جلن محسوس ہوتی ہے؟",
    "کیا آپ کی جلد خشک یا پپڑی دار ہے؟",
    "کیا آپ نے کوئی ابھار، چھالے، یا زخم محسوس کیا ہے؟",
    "کیا آپ کی جلد کا رنگ بدلا ہوا ہے یا سیاہ دھبے ہیں؟",
    "کیا آپ کی جلد چھونے یا دباؤ کے لیے حساس ہے؟",
    "کیا آپ کو جلن یا چبھن کا احساس ہوتا ہے؟",
    "کیا آپ کو زیادہ پسینہ آتا ہے یا جلد چکنی ہے؟",
    "کیا آپ نے جلد کی ساخت میں کوئی تبدیلی محسوس کی ہے؟",
    "کیا آپ کے کوئی کھلے زخم یا کٹے ہیں جو ٹھیک نہیں ہو رہے؟",
];

const SKIN_SD: &[&str] = &[
    "ڇا توهان جي چمڙي تي ڪا خارش يا ڳاڙهو داغ آهي؟",
    "ڇا توهان کي چمڙي تي خارش يا جلن محسوس ٿئي ٿي؟",
    "ڇا توهان جي چمڙي سوڪهي يا پپڙي واري آهي؟",
    "ڇا توهان ڪا اُبھار، چھالا، يا زخم محسوس ڪيو آهي؟",
    "ڇا توهان جي چمڙي جو رنگ بدليو آهي يا ڪارا داغ آهن؟",
    "ڇا توهان جي چمڙي چھوني يا دٻاءُ لاءِ حساس آهي؟",
    "ڇا توهان کي جلن يا چبھن جو احساس ٿئي ٿو؟",
    "ڇا توهان کي وڌيڪ پسينو ايندو آهي يا چمڙي چڪني آهي؟",
    "ڇا توهان چمڙي جي ساخت ۾ تبديلي محسوس ڪئي آهي؟",
    "ڇا توهان جا ڪا کليل زخم يا ڪٽا آهن جيڪي ٺيڪ نه ٿي رهيا آهن؟",
];

const DENGUE_EN: &[&str] = &[
    "Do you have a high fever (above 101°F or 38.5°C)?",
    "Do you experience severe headache?",
    "Do you have pain behind your eyes?",
    "Do you experience muscle and joint pain?",
    "Do you have nausea or vomiting?",
    "Do you notice a skin rash?",
    "Do you experience fatigue or weakness?",
    "Do you have bleeding from nose or gums?",
    "Do you experience abdominal pain?",
    "Do you have difficulty breathing?",
];

const DENGUE_UR: &[&str] = &[
    "کیا آپ کو تیز بخار ہے (101°F یا 38.5°C سے زیادہ)؟",
    "کیا آپ کو شدید سر درد ہے؟",
    "کیا آپ کو آنکھوں کے پیچھے درد ہے؟",
    "کیا آپ کو پٹھوں اور جوڑوں میں درد ہے؟",
    "کیا آپ کو متلی یا قے آتی ہے؟",
    "کیا آپ نے جلد پر خارش محسوس کی ہے؟",
    "کیا آپ کو تھکاوٹ یا کمزوری محسوس ہوتی ہے؟",
    "کیا آپ کی ناک یا مسوڑھوں سے خون بہتا ہے؟",
    "کیا آپ کو پیٹ میں درد ہے؟",
    "کیا آپ کو سانس لینے میں دشواری ہے؟",
];

const DENGUE_SD: &[&str] = &[
    "ڇا توهان کي تيز بخار آهي (101°F يا 38.5°C کان وڌيڪ)؟",
    "ڇا توهان کي شديد سر درد آهي؟",
    "ڇا توهان کي اکين جي پٺيان درد آهي؟",
    "ڇا توهان کي پٿن ۽ جوڙن ۾ درد آهي؟",
    "ڇا توهان کي متلي يا قي ايندي آهي؟",
    "ڇا توهان چمڙي تي خارش محسوس ڪئي آهي؟",
    "ڇا توهان کي ٿڪاوٽ يا ڪمزوري محسوس ٿئي ٿي؟",
    "ڇا توهان جي نڪ يا مسوڙهن مان رت وھندو آهي؟",
    "ڇا توهان کي پيٽ ۾ درد آهي؟",
    "ڇا توهان کي ساهه وٺڻ ۾ مشڪلات آهي؟",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_list_has_ten_questions() {
        for disease in Disease::ALL {
            for lang in Language::ALL {
                assert_eq!(
                    questions(disease, lang).len(),
                    10,
                    "{disease}/{lang} list length"
                );
            }
        }
    }

    #[test]
    fn test_lists_differ_per_language() {
        for disease in Disease::ALL {
            let en = questions(disease, Language::English);
            let ur = questions(disease, Language::Urdu);
            assert_ne!(en[0], ur[0]);
        }
    }
}
