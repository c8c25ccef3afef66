use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct Master {
    pub id: i64,
    pub name: &'static str,
    pub specialty: &'static str,
    pub experience: &'static str,
    pub price_range: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct Service {
    pub name: &'static str,
    pub price: &'static str,
    pub duration: &'static str,
}

/// The fixed master and service listings shown on the site. Loaded once at
/// startup and handed to whoever needs it through `AppState`; the catalog
/// never changes while the process runs.
pub struct Catalog {
    pub masters: Vec<Master>,
    pub services: Vec<Service>,
}

impl Catalog {
    pub fn load() -> Self {
        Self {
            masters: vec![
                Master {
                    id: 1,
                    name: "Александр \"Бритва\" Петров",
                    specialty: "Классические стрижки и бритье",
                    experience: "8 лет",
                    price_range: "1500-2500₽",
                    image: "master1.jpg",
                    description: "Мастер классических мужских стрижек с 8-летним опытом. Специализируется на британском стиле и традиционном бритье.",
                },
                Master {
                    id: 2,
                    name: "Дмитрий \"Стиль\" Козлов",
                    specialty: "Современные стрижки и укладки",
                    experience: "6 лет",
                    price_range: "1200-2000₽",
                    image: "master2.jpg",
                    description: "Эксперт в области современных трендов. Создает стильные образы для любого возраста и типа волос.",
                },
                Master {
                    id: 3,
                    name: "Михаил \"Борода\" Соколов",
                    specialty: "Уход за бородой и усами",
                    experience: "10 лет",
                    price_range: "800-1500₽",
                    image: "master3.jpg",
                    description: "Профессионал по уходу за бородой и усами. Мастер сложных форм и стилей бороды.",
                },
            ],
            services: vec![
                Service {
                    name: "Мужская стрижка",
                    price: "1500₽",
                    duration: "45 мин",
                },
                Service {
                    name: "Стрижка + Бритье",
                    price: "2500₽",
                    duration: "60 мин",
                },
                Service {
                    name: "Укладка волос",
                    price: "800₽",
                    duration: "30 мин",
                },
                Service {
                    name: "Стрижка бороды",
                    price: "1000₽",
                    duration: "30 мин",
                },
                Service {
                    name: "Комплексный уход",
                    price: "3500₽",
                    duration: "90 мин",
                },
                Service {
                    name: "Детская стрижка",
                    price: "1000₽",
                    duration: "30 мин",
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_expected_shape() {
        let catalog = Catalog::load();
        assert_eq!(catalog.masters.len(), 3);
        let ids: Vec<i64> = catalog.masters.iter().map(|master| master.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(catalog.services.len(), 6);
    }

    #[test]
    fn catalog_is_stable_across_loads() {
        let first = Catalog::load();
        let second = Catalog::load();
        let names = |catalog: &Catalog| -> Vec<&'static str> {
            catalog.masters.iter().map(|master| master.name).collect()
        };
        assert_eq!(names(&first), names(&second));
    }
}
