//! The message catalog. One row per [`Msg`], English always present.

use super::{Entry, Msg};

fn row(
    key: &'static str,
    en: &'static str,
    ur: Option<&'static str>,
    sd: Option<&'static str>,
) -> Entry {
    Entry { key, en, ur, sd }
}

#[allow(clippy::too_many_lines)]
pub(super) fn entry(msg: Msg) -> Entry {
    match msg {
        Msg::LanguageTitle => row(
            "languageSelection.title",
            "Select Your Preferred Language",
            Some("اپنی پسندیدہ زبان منتخب کریں"),
            Some("پنھنجي پسنديده ٻولي چونڊيو"),
        ),
        Msg::LanguageSubtitle => row(
            "languageSelection.subtitle",
            "Choose a language to continue",
            Some("جاری رکھنے کے لیے ایک زبان منتخب کریں"),
            Some("جاري رکڻ لاءِ هڪ ٻولي چونڊيو"),
        ),
        Msg::AgeTitle => row(
            "ageVerification.title",
            "Age Verification",
            Some("عمر کی تصدیق"),
            Some("عمر جي تصديق"),
        ),
        Msg::AgeQuestion => row(
            "ageVerification.question",
            "Are you under 18 or above 18?",
            Some("کیا آپ 18 سال سے کم ہیں یا 18 سال سے زیادہ؟"),
            Some("ڇا توهان 18 سال کان هيٺ آهيو يا 18 سال کان مٿي؟"),
        ),
        Msg::AgeUnder18 => row(
            "ageVerification.under18",
            "Under 18",
            Some("18 سال سے کم"),
            Some("18 سال کان هيٺ"),
        ),
        Msg::AgeAbove18 => row(
            "ageVerification.above18",
            "Above 18",
            Some("18 سال سے زیادہ"),
            Some("18 سال کان مٿي"),
        ),
        Msg::GenderTitle => row(
            "genderSelection.title",
            "Gender Selection",
            Some("جنس کا انتخاب"),
            Some("جنس چونڊ"),
        ),
        Msg::GenderQuestion => row(
            "genderSelection.question",
            "Please select your gender",
            Some("براہ کرم اپنی جنس منتخب کریں"),
            Some("مهرباني ڪري پنھنجي جنس چونڊيو"),
        ),
        Msg::GenderMale => row("genderSelection.male", "Male", Some("مرد"), Some("مرد")),
        Msg::GenderFemale => row(
            "genderSelection.female",
            "Female",
            Some("عورت"),
            Some("عورت"),
        ),
        Msg::GenderOther => row("genderSelection.other", "Other", Some("دوسرا"), Some("ٻيو")),
        Msg::GenderPreferNotToSay => row(
            "genderSelection.preferNotToSay",
            "Prefer not to say",
            Some("کہنا پسند نہیں"),
            Some("چونڊ نه ڪري سگهان"),
        ),
        Msg::CameraTitle => row(
            "cameraCapture.title",
            "Patient Photo Capture",
            Some("مریض کی تصویر لینا"),
            Some("مريض جي تصوير کڻڻ"),
        ),
        Msg::CameraInstruction => row(
            "cameraCapture.instruction",
            "Please position your face in the frame and click capture",
            Some("براہ کرم اپنا چہرہ فریم میں رکھیں اور کیپچر پر کلک کریں"),
            Some("مهرباني ڪري پنھنجو چھري فریم ۾ رکو ۽ کپچر تي ڪلڪ ڪريو"),
        ),
        Msg::CameraCapture => row(
            "cameraCapture.capture",
            "Capture Photo",
            Some("تصویر لیں"),
            Some("تصوير کڻو"),
        ),
        Msg::CameraRetake => row(
            "cameraCapture.retake",
            "Retake",
            Some("دوبارہ لیں"),
            Some("ٻيهر کڻو"),
        ),
        Msg::CameraContinue => row(
            "cameraCapture.continue",
            "Continue",
            Some("جاری رکھیں"),
            Some("جاري رکو"),
        ),
        Msg::CameraLoading => row(
            "cameraCapture.loading",
            "Loading camera...",
            Some("کیمرہ لوڈ ہو رہا ہے..."),
            Some("ڪئميرا لوڊ ٿي رهيو آهي..."),
        ),
        Msg::CameraPermissionError => row(
            "cameraCapture.error",
            "Unable to access camera. Please check permissions.",
            Some("کیمرہ تک رسائی حاصل نہیں ہو سکی۔ براہ کرم اجازتوں کی جانچ کریں۔"),
            Some("ڪئميرا تائين رسائي حاصل نٿي ڪري سگهجي. مهرباني ڪري اجازتن جي چڪاس ڪريو."),
        ),
        Msg::CameraNoDevice => row(
            "cameraCapture.noCamera",
            "No camera found. Please connect a camera device.",
            Some("کوئی کیمرہ نہیں ملا۔ براہ کرم ایک کیمرہ ڈیوائس منسلک کریں۔"),
            Some("ڪوبه ڪئميرا نه مليو. مهرباني ڪري هڪ ڪئميرا ڊوائيس ڳنڍيو."),
        ),
        // The original never localized this one; only English exists.
        Msg::MicError => row(
            "breathingCapture.microphone",
            "Unable to access microphone. Please check permissions.",
            None,
            None,
        ),
        Msg::CnicTitle => row(
            "cnicCapture.title",
            "CNIC Verification",
            Some("CNIC تصدیق"),
            Some("CNIC تصديق"),
        ),
        Msg::CnicInstruction => row(
            "cnicCapture.instruction",
            "Please place your CNIC in front of the camera",
            Some("براہ کرم اپنا CNIC کیمرہ کے سامنے رکھیں"),
            Some("مهرباني ڪري پنھنجو CNIC ڪئميرا جي سامهون رکو"),
        ),
        Msg::CnicCapture => row(
            "cnicCapture.capture",
            "Capture CNIC",
            Some("CNIC لیں"),
            Some("CNIC کڻو"),
        ),
        Msg::PhoneTitle => row(
            "phoneNumber.title",
            "Phone Number",
            Some("فون نمبر"),
            Some("فون نمبر"),
        ),
        Msg::PhoneInstruction => row(
            "phoneNumber.instruction",
            "Please enter your phone number",
            Some("براہ کرم اپنا فون نمبر درج کریں"),
            Some("مهرباني ڪري پنھنجو فون نمبر داخل ڪريو"),
        ),
        Msg::PhoneLabel => row(
            "phoneNumber.label",
            "Phone Number",
            Some("فون نمبر"),
            Some("فون نمبر"),
        ),
        Msg::PhonePlaceholder => row(
            "phoneNumber.placeholder",
            "+92 - 3XXXXXXXXX",
            Some("+92 - 3XXXXXXXXX"),
            Some("+92 - 3XXXXXXXXX"),
        ),
        Msg::PhoneContinue => row(
            "phoneNumber.continue",
            "Continue",
            Some("جاری رکھیں"),
            Some("جاري رکو"),
        ),
        Msg::PhoneInvalid => row(
            "phoneNumber.error",
            "Please enter a valid phone number",
            Some("براہ کرم درست فون نمبر درج کریں"),
            Some("مهرباني ڪري صحيح فون نمبر داخل ڪريو"),
        ),
        Msg::PhoneFormat => row(
            "phoneNumber.format",
            "Format: +92 - 3XXXXXXXXX",
            Some("فارمیٹ: +92 - 3XXXXXXXXX"),
            Some("فارميٽ: +92 - 3XXXXXXXXX"),
        ),
        Msg::DiseaseTitle => row(
            "diseaseSelection.title",
            "Select Disease Type",
            Some("بیماری کا انتخاب"),
            Some("بيماري جو قسم چونڊيو"),
        ),
        Msg::DiseaseInstruction => row(
            "diseaseSelection.instruction",
            "Please select the type of problem you want to detect",
            Some("براہ کرم اپنی بیماری کی قسم منتخب کریں"),
            Some("مهرباني ڪري پنھنجي بيماري جو قسم چونڊيو"),
        ),
        Msg::DiseaseEyes => row(
            "diseaseSelection.eyes",
            "Do you have Eyes Problem?",
            Some("کیا آپ کو آنکھوں کا مسئلہ ہے؟"),
            Some("ڇا توهان کي اکين جي مسئلو آهي؟"),
        ),
        Msg::DiseaseBreathing => row(
            "diseaseSelection.breathing",
            "Do you have problem in breathing?",
            Some("کیا آپ کو سانس لینے میں مسئلہ ہے؟"),
            Some("ڇا توهان کي ساهه وٺڻ ۾ مسئلو آهي؟"),
        ),
        Msg::DiseaseSkin => row(
            "diseaseSelection.skin",
            "Do you have problem related to skin?",
            Some("کیا آپ کو جلد سے متعلق مسئلہ ہے؟"),
            Some("ڇا توهان کي چمڙي سان لاڳاپيل مسئلو آهي؟"),
        ),
        Msg::DiseaseDengue => row(
            "diseaseSelection.dengue",
            "Do you want to detect dengue?",
            Some("کیا آپ ڈینگی کا پتہ لگانا چاہتے ہیں؟"),
            Some("ڇا توهان ڊينگو ڳولڻ چاهيو ٿا؟"),
        ),
        Msg::BreathingTitle => row(
            "breathingCapture.title",
            "Breathing Problem - Image Capture",
            Some("سانس لینے کا مسئلہ - تصویر لینا"),
            Some("ساهه وٺڻ جو مسئلو - تصوير کڻڻ"),
        ),
        Msg::BreathingXrayTitle => row(
            "breathingCapture.xrayTitle",
            "X-Ray Capture",
            Some("X-Ray کیپچر"),
            Some("X-Ray کڻڻ"),
        ),
        Msg::BreathingXrayInstruction => row(
            "breathingCapture.xrayInstruction",
            "Please place your X-ray in the camera frame",
            Some("براہ کرم اپنا X-Ray کیمرہ فریم میں رکھیں"),
            Some("مهرباني ڪري پنھنجو X-Ray ڪئميرا فریم ۾ رکو"),
        ),
        Msg::BreathingXrayCapture => row(
            "breathingCapture.xrayCapture",
            "Capture X-Ray",
            Some("X-Ray لیں"),
            Some("X-Ray کڻو"),
        ),
        Msg::BreathingStethTitle => row(
            "breathingCapture.stethoscopeTitle",
            "Stethoscope Recording",
            Some("اسٹیتھوسکوپ ریکارڈنگ"),
            Some("اسٿيٿوسڪوپ رڪارڊنگ"),
        ),
        Msg::BreathingStethInstruction => row(
            "breathingCapture.stethoscopeInstruction",
            "Place the stethoscope on your chest/lung area and cough",
            Some("اسٹیتھوسکوپ کو اپنے سینے/پھیپھڑوں کے علاقے پر رکھیں اور کھانسیں"),
            Some("اسٿيٿوسڪوپ کي پنھنجي چھاتي/پھپڙي واري علائقي ۾ رکو ۽ کھانسيو"),
        ),
        Msg::BreathingStethRecord => row(
            "breathingCapture.stethoscopeRecord",
            "Start Recording",
            Some("ریکارڈنگ شروع کریں"),
            Some("رڪارڊنگ شروع ڪريو"),
        ),
        Msg::BreathingStethStop => row(
            "breathingCapture.stethoscopeStop",
            "Stop Recording",
            Some("ریکارڈنگ بند کریں"),
            Some("رڪارڊنگ بند ڪريو"),
        ),
        Msg::EyesCaptureTitle => row(
            "eyesCapture.title",
            "Eyes Problem - Image Capture",
            Some("آنکھوں کا مسئلہ - تصویر لینا"),
            Some("اکين جو مسئلو - تصوير کڻڻ"),
        ),
        Msg::EyesCaptureInstruction => row(
            "eyesCapture.instruction",
            "Please close your eyes and we will capture the image",
            Some("براہ کرم اپنی آنکھیں بند کریں اور ہم تصویر لیں گے"),
            Some("مهرباني ڪري پنھنجيون اکيون بند ڪريو ۽ اسين تصوير کڻنداسين"),
        ),
        Msg::EyesCaptureAction => row(
            "eyesCapture.capture",
            "Capture Image",
            Some("تصویر لیں"),
            Some("تصوير کڻو"),
        ),
        Msg::DengueCaptureTitle => row(
            "dengueCapture.title",
            "Dengue Detection - NS-1 Kit",
            Some("ڈینگی کی تشخیص - NS-1 کٹ"),
            Some("ڊينگو ڳولھه - NS-1 ڪٽ"),
        ),
        Msg::DengueCaptureInstruction => row(
            "dengueCapture.instruction",
            "Please place your NS-1 kit test result in the camera frame",
            Some("براہ کرم اپنا NS-1 کٹ ٹیسٹ نتیجہ کیمرہ فریم میں رکھیں"),
            Some("مهرباني ڪري پنھنجو NS-1 ڪٽ ٽيسٽ نتيجو ڪئميرا فریم ۾ رکو"),
        ),
        Msg::DengueCaptureAction => row(
            "dengueCapture.capture",
            "Capture NS-1 Kit Result",
            Some("NS-1 کٹ نتیجہ لیں"),
            Some("NS-1 ڪٽ نتيجو کڻو"),
        ),
        Msg::SkinCaptureTitle => row(
            "skinCapture.title",
            "Skin Problem - Image Capture",
            Some("جلد کا مسئلہ - تصویر لینا"),
            Some("چمڙي جو مسئلو - تصوير کڻڻ"),
        ),
        Msg::SkinCaptureInstruction => row(
            "skinCapture.instruction",
            "Please position the affected skin area in the camera frame",
            Some("براہ کرم متاثرہ جلد کے علاقے کو کیمرہ فریم میں رکھیں"),
            Some("مهرباني ڪري متاثر ٿيل چمڙي واري علائقي کي ڪئميرا فریم ۾ رکو"),
        ),
        Msg::SkinCaptureAction => row(
            "skinCapture.capture",
            "Capture Affected Area",
            Some("متاثرہ علاقہ لیں"),
            Some("متاثر ٿيل علائقو کڻو"),
        ),
        Msg::SkinFrameGuide => row(
            "skinCapture.frameGuide",
            "Position affected skin area here",
            Some("متاثرہ جلد کا علاقہ یہاں رکھیں"),
            Some("متاثر ٿيل چمڙي واري علائقو هتي رکو"),
        ),
        Msg::QuestionnaireTitle => row(
            "questionnaire.title",
            "Medical Questionnaire",
            Some("طبی سوالنامہ"),
            Some("طبي سوالنامو"),
        ),
        Msg::QuestionnaireQuestion => row(
            "questionnaire.question",
            "Question",
            Some("سوال"),
            Some("سوال"),
        ),
        Msg::QuestionnaireOf => row("questionnaire.of", "of", Some("میں سے"), Some("مان")),
        Msg::QuestionnaireYes => row("questionnaire.yes", "Yes", Some("ہاں"), Some("ها")),
        Msg::QuestionnaireNo => row("questionnaire.no", "No", Some("نہیں"), Some("نه")),
        Msg::QuestionnaireSometimes => row(
            "questionnaire.sometimes",
            "Sometimes",
            Some("کبھی کبھی"),
            Some("ڪڏهن ڪڏهن"),
        ),
        Msg::SeverityMild => row("questionnaire.mild", "Mild", Some("ہلکا"), Some("هلڪو")),
        Msg::SeverityModerate => row(
            "questionnaire.moderate",
            "Moderate",
            Some("درمیانہ"),
            Some("وچولو"),
        ),
        Msg::SeveritySevere => row(
            "questionnaire.severe",
            "Severe",
            Some("شدید"),
            Some("سخت"),
        ),
        Msg::ResultsTitle => row(
            "results.title",
            "Diagnosis Results",
            Some("تشخیص کے نتائج"),
            Some("تشخيص جا نتيجا"),
        ),
        Msg::ResultsSummary => row(
            "results.summary",
            "Summary",
            Some("خلاصہ"),
            Some("خلاصو"),
        ),
        Msg::ResultsRecommendations => row(
            "results.recommendations",
            "Recommendations",
            Some("توصیفات"),
            Some("سفارشون"),
        ),
        Msg::ResultsSeverity => row(
            "results.severity",
            "Severity Level",
            Some("شدت کی سطح"),
            Some("شدت جي سطح"),
        ),
        Msg::ResultsBackToHome => row(
            "results.backToHome",
            "Back to Home",
            Some("گھر واپس"),
            Some("گهر واپس"),
        ),
        Msg::ResultsDownloadReport => row(
            "results.downloadReport",
            "Download Report",
            Some("رپورٹ ڈاؤن لوڈ کریں"),
            Some("رپورٽ ڊائون لوڊ ڪريو"),
        ),
    }
}
