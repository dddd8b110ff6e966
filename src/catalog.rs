use crate::domain::{
    Activity,
    AgeGroup::{self, Adult, Child, Senior, Teen, Toddler, Young},
    Category::{
        Chore, Cooking, Creative, Digital, Fun, Intellectual, Music, Outdoors, Physical, Social,
    },
    GenderTag::{Both, Girl},
    Icon,
};

/// The built-in catalog. Loaded once, never mutated; ids are stable and
/// unique (guarded by tests below).
pub const ACTIVITIES: &[Activity] = &[
    // Toddlers & children
    Activity {
        id: "c1",
        text: "בנו מבצר מכריות ושמיכות בסלון",
        categories: &[Fun, Creative, Social],
        suitable_ages: &[Toddler, Child],
        suitable_genders: &[Both],
        description: Some("השתמשו בספות, כסאות וכל מה שאפשר כדי לבנות את המבצר הכי שווה."),
        icon: Icon("castle"),
    },
    Activity {
        id: "c2",
        text: "ציירו ציור של החיה האהובה עליכם אבל כגיבור על",
        categories: &[Creative],
        suitable_ages: &[Toddler, Child],
        suitable_genders: &[Both],
        description: None,
        icon: Icon("palette"),
    },
    Activity {
        id: "c3",
        text: "הכינו מסלול מכשולים בבית",
        categories: &[Physical, Fun],
        suitable_ages: &[Toddler, Child],
        suitable_genders: &[Both],
        description: Some("אפשר לקפוץ מעל כריות, לזחול מתחת לשולחן וללכת על קו ישר."),
        icon: Icon("activity"),
    },
    Activity {
        id: "c4",
        text: "הכינו שרשרת או צמיד מחרוזים או פסטה",
        categories: &[Creative],
        suitable_ages: &[Child],
        suitable_genders: &[Girl, Both],
        description: None,
        icon: Icon("gem"),
    },
    Activity {
        id: "c5",
        text: "בנו מגדל הכי גבוה שאתם יכולים מלגו או קוביות",
        categories: &[Creative, Fun],
        suitable_ages: &[Toddler, Child],
        suitable_genders: &[Both],
        description: None,
        icon: Icon("blocks"),
    },
    Activity {
        id: "c6",
        text: "משחק מחבואים ברחבי הבית",
        categories: &[Fun, Physical, Social],
        suitable_ages: &[Toddler, Child],
        suitable_genders: &[Both],
        description: None,
        icon: Icon("eye-off"),
    },
    Activity {
        id: "c7",
        text: "הכינו הר געש מסודה לשתייה וחומץ בכיור",
        categories: &[Creative, Fun],
        suitable_ages: &[Child, Teen],
        suitable_genders: &[Both],
        description: Some("שימו סודה לשתייה בכוס, הוסיפו צבע מאכל, ושפכו חומץ פנימה!"),
        icon: Icon("flask-conical"),
    },
    Activity {
        id: "c8",
        text: "משחק פסלים מוזיקליים",
        categories: &[Fun, Physical, Music, Social],
        suitable_ages: &[Toddler, Child],
        suitable_genders: &[Both],
        description: Some("רקדו לצלילי המוזיקה וקפאו במקום כשהיא נעצרת."),
        icon: Icon("music"),
    },
    // Teens & young adults
    Activity {
        id: "t1",
        text: "למדו לערוך סרטון קצר בטלפון",
        categories: &[Creative, Digital],
        suitable_ages: &[Teen, Young],
        suitable_genders: &[Both],
        description: None,
        icon: Icon("video"),
    },
    Activity {
        id: "t2",
        text: "סדרו מחדש את החדר שלכם",
        categories: &[Chore, Creative],
        suitable_ages: &[Teen, Young],
        suitable_genders: &[Both],
        description: Some("להזיז את המיטה, לסדר את המדפים ולזרוק דברים ישנים."),
        icon: Icon("bed"),
    },
    Activity {
        id: "t3",
        text: "אימון כושר ביתי של 20 דקות",
        categories: &[Physical],
        suitable_ages: &[Teen, Young, Adult],
        suitable_genders: &[Both],
        description: Some("שכיבות סמיכה, כפיפות בטן, וג׳אמפינג ג׳קס."),
        icon: Icon("dumbbell"),
    },
    Activity {
        id: "t4",
        text: "כתבו מכתב לעצמכם בעוד 5 שנים",
        categories: &[Intellectual, Creative],
        suitable_ages: &[Teen, Young],
        suitable_genders: &[Both],
        description: None,
        icon: Icon("mail"),
    },
    // Adults & seniors
    Activity {
        id: "a1",
        text: "נקו את תיבת המייל שלכם ומחקו דברים מיותרים",
        categories: &[Chore, Digital],
        suitable_ages: &[Young, Adult, Senior],
        suitable_genders: &[Both],
        description: Some("זה משעמם, אבל מספק מאוד אחר כך."),
        icon: Icon("trash-2"),
    },
    Activity {
        id: "a2",
        text: "נסו לבשל מתכון חדש שמעולם לא ניסיתם",
        categories: &[Creative, Fun, Cooking],
        suitable_ages: &[Young, Adult, Senior],
        suitable_genders: &[Both],
        description: None,
        icon: Icon("chef-hat"),
    },
    Activity {
        id: "a3",
        text: "עברו על אלבומי תמונות ישנים וסדרו אותם",
        categories: &[Fun, Chore, Social],
        suitable_ages: &[Adult, Senior],
        suitable_genders: &[Both],
        description: None,
        icon: Icon("image"),
    },
    Activity {
        id: "a4",
        text: "האזינו לפודקאסט בנושא שאתם לא מבינים בו כלום",
        categories: &[Intellectual, Digital],
        suitable_ages: &[Young, Adult, Senior],
        suitable_genders: &[Both],
        description: None,
        icon: Icon("headphones"),
    },
    // Mixed ages
    Activity {
        id: "n1",
        text: "טניס בלונים",
        categories: &[Fun, Physical, Social],
        suitable_ages: &[Toddler, Child, Teen],
        suitable_genders: &[Both],
        description: Some("נפחו בלון ונסו לשמור אותו באוויר מבלי שיגע ברצפה."),
        icon: Icon("wind"),
    },
    Activity {
        id: "n2",
        text: "למדו קסם קלפים פשוט",
        categories: &[Intellectual, Fun, Social],
        suitable_ages: &[Child, Teen, Young, Adult],
        suitable_genders: &[Both],
        description: Some("חפשו מדריך ביוטיוב והפתיעו את המשפחה."),
        icon: Icon("spade"),
    },
    Activity {
        id: "n3",
        text: "תכננו את הארוחות לשבוע הקרוב",
        categories: &[Chore, Intellectual, Cooking],
        suitable_ages: &[Young, Adult, Senior],
        suitable_genders: &[Both],
        description: Some("חסכו זמן וכסף בעזרת תכנון מוקדם."),
        icon: Icon("calendar"),
    },
    Activity {
        id: "n4",
        text: "תחרות מבטים",
        categories: &[Fun, Social],
        suitable_ages: &[Toddler, Child, Teen, Young, Adult, Senior],
        suitable_genders: &[Both],
        description: Some("הראשון שמצמץ מפסיד!"),
        icon: Icon("eye"),
    },
    Activity {
        id: "n5",
        text: "אתגר איזון ספרים",
        categories: &[Physical, Fun],
        suitable_ages: &[Child, Teen, Young, Adult],
        suitable_genders: &[Both],
        description: Some("נסו ללכת בקו ישר עם ספר על הראש מבלי שיפול."),
        icon: Icon("book-open"),
    },
    Activity {
        id: "n6",
        text: "הכינו משחק קופסה משלכם",
        categories: &[Creative, Fun, Social],
        suitable_ages: &[Child, Teen, Young],
        suitable_genders: &[Both],
        description: Some("ציירו לוח, הכינו חיילים מפקקים והמציאו חוקים."),
        icon: Icon("dice-5"),
    },
    Activity {
        id: "n7",
        text: "למדו ריקוד חדש מיוטיוב או טיקטוק",
        categories: &[Physical, Fun, Music, Digital],
        suitable_ages: &[Child, Teen, Young, Adult],
        suitable_genders: &[Both],
        description: Some("זה מצחיק, בריא ומעביר את הזמן בכיף."),
        icon: Icon("music-2"),
    },
    Activity {
        id: "n8",
        text: "סדרו את ספריית הספרים לפי צבעים",
        categories: &[Chore, Creative],
        suitable_ages: &[Teen, Young, Adult, Senior],
        suitable_genders: &[Both],
        description: Some("זה נראה נהדר ונותן תחושה של סדר חדש בעיניים."),
        icon: Icon("library"),
    },
    Activity {
        id: "n9",
        text: "הקשיבו לאלבום מוזיקה מלא מההתחלה ועד הסוף",
        categories: &[Intellectual, Fun, Music],
        suitable_ages: &[Teen, Young, Adult, Senior],
        suitable_genders: &[Both],
        description: Some("בלי לדלג על שירים, פשוט להקשיב ליצירה שלמה."),
        icon: Icon("disc"),
    },
    Activity {
        id: "n10",
        text: "כתבו רשימת משאלות (Bucket List) לשנה הקרובה",
        categories: &[Intellectual, Creative],
        suitable_ages: &[Teen, Young, Adult, Senior],
        suitable_genders: &[Both],
        description: Some("מקומות שתרצו לבקר, דברים שתרצו ללמוד וחוויות שתרצו לחוות."),
        icon: Icon("list-todo"),
    },
    Activity {
        id: "n11",
        text: "עברו על ארון התרופות וזרקו תרופות שפג תוקפן",
        categories: &[Chore],
        suitable_ages: &[Adult, Senior],
        suitable_genders: &[Both],
        description: Some("זה חשוב לבטיחות ומפנה המון מקום."),
        icon: Icon("pill"),
    },
    Activity {
        id: "n12",
        text: "סדרו את \"מגירת הבלגן\" שכולם זורקים אליה הכל",
        categories: &[Chore],
        suitable_ages: &[Young, Adult, Senior],
        suitable_genders: &[Both],
        description: Some("המגירה הזו במטבח או בכניסה לבית שצריכה הצלה."),
        icon: Icon("archive"),
    },
    Activity {
        id: "n13",
        text: "למדו איך אומרים \"שלום\" ו\"תודה\" ב-3 שפות חדשות",
        categories: &[Intellectual],
        suitable_ages: &[Teen, Young, Adult, Senior],
        suitable_genders: &[Both],
        description: Some("תרגיל מצוין למוח וכיף לדעת."),
        icon: Icon("languages"),
    },
    Activity {
        id: "n14",
        text: "כתבו 3 זיכרונות ילדות משמעותיים במחברת",
        categories: &[Intellectual, Creative],
        suitable_ages: &[Adult, Senior],
        suitable_genders: &[Both],
        description: Some("שימור זיכרונות זה דבר יקר ערך, לעצמכם ולמשפחה."),
        icon: Icon("book-heart"),
    },
    Activity {
        id: "n15",
        text: "קראו ערך אקראי בוויקיפדיה ולמדו נושא חדש",
        categories: &[Intellectual, Digital],
        suitable_ages: &[Teen, Young, Adult, Senior],
        suitable_genders: &[Both],
        description: Some("הרחיבו אופקים בנושא שלא חשבתם עליו מעולם."),
        icon: Icon("globe"),
    },
    Activity {
        id: "n16",
        text: "מיינו את התמונות בטלפון ומחקו צילומי מסך ישנים",
        categories: &[Chore, Digital],
        suitable_ages: &[Teen, Young, Adult, Senior],
        suitable_genders: &[Both],
        description: Some("מפנה מקום בזיכרון ועושה סדר בראש."),
        icon: Icon("smartphone"),
    },
    Activity {
        id: "n17",
        text: "פתרו תשבץ, סודוקו או חידת היגיון",
        categories: &[Intellectual],
        suitable_ages: &[Young, Adult, Senior],
        suitable_genders: &[Both],
        description: Some("שמירה על כושר מנטלי היא חשובה לא פחות מכושר גופני."),
        icon: Icon("grid-3x3"),
    },
    Activity {
        id: "n18",
        text: "למדו לשחק סוליטר או משחק קלפים חדש",
        categories: &[Intellectual, Fun, Social],
        suitable_ages: &[Teen, Young, Adult, Senior],
        suitable_genders: &[Both],
        description: Some("זה הזמן לשלוף חפיסת קלפים ולהפעיל את הראש."),
        icon: Icon("club"),
    },
    Activity {
        id: "n19",
        text: "צאו לסיבוב צילום בשכונה - חפשו דברים יפים לצלם",
        categories: &[Creative, Physical, Outdoors],
        suitable_ages: &[Teen, Young, Adult],
        suitable_genders: &[Both],
        description: Some("נסו למצוא זווית חדשה ומעניינת למקומות מוכרים."),
        icon: Icon("camera"),
    },
    Activity {
        id: "n20",
        text: "הכינו בובות גרב מגרביים ישנים וכפתורים",
        categories: &[Creative, Fun],
        suitable_ages: &[Toddler, Child],
        suitable_genders: &[Both],
        description: Some("אפשר להוסיף צמר לשיער ולהציג הצגה קטנה."),
        icon: Icon("smile"),
    },
    Activity {
        id: "n21",
        text: "עשו סדר במקרר וזרקו מוצרים פגי תוקף",
        categories: &[Chore, Cooking],
        suitable_ages: &[Young, Adult, Senior],
        suitable_genders: &[Both],
        description: Some("הזדמנות טובה לנקות מדפים ולעשות מקום לדברים טעימים."),
        icon: Icon("snowflake"),
    },
    Activity {
        id: "n22",
        text: "ערכו פיקניק בסלון עם שמיכה וחטיפים",
        categories: &[Fun, Social, Cooking],
        suitable_ages: &[Toddler, Child, Teen, Young, Adult, Senior],
        suitable_genders: &[Both],
        description: Some("מי אמר שחייבים לצאת מהבית כדי ליהנות מפיקניק?"),
        icon: Icon("utensils"),
    },
    Activity {
        id: "n23",
        text: "שתלו גרעין של פרי או ירק בעציץ קטן",
        categories: &[Outdoors, Creative],
        suitable_ages: &[Child, Teen, Adult, Senior],
        suitable_genders: &[Both],
        description: Some("השקו אותו כל יום וצפו בו גדל לאט לאט."),
        icon: Icon("sprout"),
    },
    Activity {
        id: "n24",
        text: "תרגול נשימות או מדיטציה של 5 דקות",
        categories: &[Physical, Intellectual],
        suitable_ages: &[Teen, Young, Adult, Senior],
        suitable_genders: &[Both],
        description: Some("עצמו עיניים, קחו אוויר עמוק ונסו לנקות את הראש."),
        icon: Icon("flower"),
    },
    Activity {
        id: "n25",
        text: "למדו לקפל אוריגמי של עגור או סירה",
        categories: &[Creative, Intellectual],
        suitable_ages: &[Child, Teen, Young, Adult],
        suitable_genders: &[Both],
        description: Some("כל מה שצריך זה דף נייר מרובע וקצת סבלנות."),
        icon: Icon("send"),
    },
    Activity {
        id: "n26",
        text: "ערב קריוקי ביתי עם שירים ביוטיוב",
        categories: &[Music, Fun, Social],
        suitable_ages: &[Child, Teen, Young, Adult],
        suitable_genders: &[Both],
        description: Some("בחרו את השירים האהובים עליכם ושירו בקולי קולות."),
        icon: Icon("mic"),
    },
    Activity {
        id: "n27",
        text: "הכינו קולאז׳ מגזירות של עיתונים ישנים",
        categories: &[Creative, Fun],
        suitable_ages: &[Child, Teen, Adult, Senior],
        suitable_genders: &[Both],
        description: Some("גזרו תמונות וכותרות מעניינות והדביקו אותן ליצירה חדשה."),
        icon: Icon("scissors"),
    },
];

pub fn activity_by_id(id: &str) -> Option<&'static Activity> {
    ACTIVITIES.iter().find(|a| a.id == id)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_catalog_is_not_empty() {
        assert!(!ACTIVITIES.is_empty());
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let mut seen = HashSet::new();
        for activity in ACTIVITIES {
            assert!(seen.insert(activity.id), "duplicate id {}", activity.id);
        }
    }

    #[test]
    fn test_every_activity_targets_someone() {
        for activity in ACTIVITIES {
            assert!(
                !activity.suitable_ages.is_empty(),
                "{} has no age groups",
                activity.id
            );
            assert!(
                !activity.suitable_genders.is_empty(),
                "{} has no gender tags",
                activity.id
            );
            assert!(
                !activity.categories.is_empty(),
                "{} has no categories",
                activity.id
            );
        }
    }

    #[test]
    fn test_every_age_group_has_activities() {
        for age in AgeGroup::ALL {
            assert!(
                ACTIVITIES.iter().any(|a| a.suitable_ages.contains(&age)),
                "no activities for {:?}",
                age
            );
        }
    }

    #[test]
    fn test_activity_by_id() {
        assert_eq!(activity_by_id("c4").map(|a| a.id), Some("c4"));
        assert!(activity_by_id("zz").is_none());
    }
}
