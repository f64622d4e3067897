use primer_core::*;
use primer_navigation::Navigator;
use primer_ui::*;

use crate::DemoPage;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub city: String,
}

/// Form contents, all as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub age: String,
    pub city: String,
}

impl From<Draft> for Person {
    /// Unparseable ages become 0.
    fn from(Draft { name, email, age, city }: Draft) -> Self {
        Self {
            id: 0,
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            age: age.trim().parse().unwrap_or(0),
            city: city.trim().to_string(),
        }
    }
}

pub fn seed() -> Vec<Person> {
    [
        (1, "John Doe", "john@example.com", 25, "New York"),
        (2, "Jane Smith", "jane@example.com", 30, "Los Angeles"),
        (3, "Bob Johnson", "bob@example.com", 35, "Chicago"),
    ]
    .into_iter()
    .map(|(id, name, email, age, city)| Person {
        id,
        name: name.into(),
        email: email.into(),
        age,
        city: city.into(),
    })
    .collect()
}

/// `None` unless both name and email are filled in.
pub fn person_from(draft: &Draft, id: u64) -> Option<Person> {
    let person = Person {
        id,
        ..Person::from(draft.clone())
    };
    (!person.name.is_empty() && !person.email.is_empty()).then_some(person)
}

pub fn describe(person: &Person) -> String {
    let Person {
        name, age, email, ..
    } = person;
    format!("{name} ({age}) - {email}")
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stats {
    pub total: usize,
    pub average_age: f64,
    /// In order of first appearance.
    pub cities: Vec<String>,
}

pub fn stats(people: &[Person]) -> Stats {
    let total = people.len();
    let age_sum: u64 = people.iter().map(|p| u64::from(p.age)).sum();
    let average_age = if total == 0 {
        0.0
    } else {
        age_sum as f64 / total as f64
    };
    let cities = people.iter().fold(Vec::<String>::new(), |mut seen, p| {
        if !seen.contains(&p.city) {
            seen.push(p.city.clone());
        }
        seen
    });
    Stats {
        total,
        average_age,
        cities,
    }
}

/// People per city, cities in order of first appearance.
pub fn by_city(people: &[Person]) -> Vec<(String, Vec<&Person>)> {
    people.iter().fold(Vec::<(String, Vec<&Person>)>::new(), |mut groups, person| {
        match groups.iter_mut().find(|(city, _)| *city == person.city) {
            Some((_, members)) => members.push(person),
            None => groups.push((person.city.clone(), vec![person])),
        }
        groups
    })
}

pub fn greet(name: &str, greeting: Option<&str>) -> String {
    format!("{}, {name}!", greeting.unwrap_or("Hello"))
}

pub fn sum(numbers: &[i64]) -> i64 {
    numbers.iter().sum()
}

pub fn first_name(people: &[Person]) -> String {
    people
        .first()
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "No users found".into())
}

pub fn LanguageFeaturesDemo(nav: &Navigator) -> View {
    let people = remember_with_key("people", || signal(seed()));
    let draft = remember_with_key("draft", || signal(Draft::default()));
    let next_id = remember_with_key("next-id", || signal(4u64));
    let notice = remember_with_key("notice", || signal(None::<String>));

    let field = |hint: &'static str, pick: fn(&mut Draft) -> &mut String| {
        let mut current = draft.get();
        let value = std::mem::take(pick(&mut current));
        let draft = draft.clone();
        TextField(hint, value, move |s| draft.update(|d| *pick(d) = s))
    };

    let add = {
        let (people, draft, next_id) = (people.clone(), draft.clone(), next_id.clone());
        move || {
            let id = next_id.get();
            match person_from(&draft.get(), id) {
                Some(person) => {
                    log::debug!("adding {}", describe(&person));
                    people.update(|list| list.push(person));
                    next_id.set(id + 1);
                    draft.set(Draft::default());
                }
                None => log::debug!("name and email are required"),
            }
        }
    };

    let list = people.get();
    let Stats {
        total,
        average_age,
        cities,
    } = stats(&list);

    let rows: Vec<View> = list
        .iter()
        .map(|person| {
            let id = person.id;
            let people = people.clone();
            Row().child((
                Text(describe(person)),
                Button(format!("Delete #{id}"), move || {
                    people.update(|list| list.retain(|p| p.id != id))
                }),
            ))
        })
        .collect();

    let city_rows: Vec<View> = by_city(&list)
        .into_iter()
        .map(|(city, members)| Text(format!("{city}: {} users", members.len())))
        .collect();

    let example = |label: &'static str, result: String| {
        let notice = notice.clone();
        Button(label, move || notice.set(Some(result.clone())))
    };

    DemoPage(
        nav,
        (
            (
                Section("Closures and struct update").child(Bullets(&[
                    "Closures: move || { .. } capture what they use",
                    "Struct update: Person { id, ..Person::from(draft) }",
                    "Used in: Add User",
                ])),
                Section("Pattern matching").child(Bullets(&[
                    "Destructure structs: let Person { name, age, .. } = person",
                    "Used in: each user row and the statistics",
                ])),
                Section("Iterators").child(Bullets(&[
                    "map, filter, fold instead of loops",
                    "Used in: statistics and users by city",
                ])),
                Section("Option instead of defaults and null").child(Bullets(&[
                    "Optional arguments: greeting: Option<&str>",
                    "Slices for any number of values: &[i64]",
                    "first().map(..).unwrap_or_else(..) when the list may be empty",
                ])),
            ),
            Section("Add a user").child((
                field("Name", |d| &mut d.name),
                field("Email", |d| &mut d.email),
                field("Age", |d| &mut d.age),
                field("City", |d| &mut d.city),
                Button("Add User", add),
            )),
            Section("Statistics").child((
                Text(format!("Total Users: {total}")),
                Text(format!("Average Age: {average_age:.1}")),
                Text(format!("Cities: {}", cities.join(", "))),
            )),
            Section("Users List").child(if rows.is_empty() {
                vec![Note("No users")]
            } else {
                rows
            }),
            Section("Users by City").child(city_rows),
            Section("Function Examples").child((
                example("Default Greeting", greet("Alice", None)),
                example("Custom Greeting", greet("Bob", Some("Hi"))),
                example(
                    "Sum Numbers (1,2,3,4,5)",
                    format!("Sum: {}", sum(&[1, 2, 3, 4, 5])),
                ),
                example("Get First User", format!("First User: {}", first_name(&list))),
                notice.get().map(|n| SuccessText(n)),
            )),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_needs_name_and_email() {
        let draft = Draft {
            name: " Ada ".into(),
            email: "ada@example.com".into(),
            age: "abc".into(),
            city: "London".into(),
        };
        let person = person_from(&draft, 9).unwrap();
        assert_eq!(person.id, 9);
        assert_eq!(person.name, "Ada");
        assert_eq!(person.age, 0);

        let missing = Draft {
            email: String::new(),
            ..draft
        };
        assert_eq!(person_from(&missing, 10), None);
    }

    #[test]
    fn test_stats_and_grouping() {
        let mut people = seed();
        people.push(Person {
            id: 4,
            city: "Chicago".into(),
            age: 42,
            ..people[0].clone()
        });
        let s = stats(&people);
        assert_eq!(s.total, 4);
        assert!((s.average_age - 33.0).abs() < f64::EPSILON);
        assert_eq!(s.cities, vec!["New York", "Los Angeles", "Chicago"]);

        let groups: Vec<(String, usize)> = by_city(&people)
            .into_iter()
            .map(|(c, m)| (c, m.len()))
            .collect();
        assert_eq!(groups[2], ("Chicago".to_string(), 2));

        assert_eq!(stats(&[]).average_age, 0.0);
    }

    #[test]
    fn test_small_helpers() {
        assert_eq!(greet("Alice", None), "Hello, Alice!");
        assert_eq!(greet("Bob", Some("Hi")), "Hi, Bob!");
        assert_eq!(sum(&[1, 2, 3, 4, 5]), 15);
        assert_eq!(sum(&[]), 0);
        assert_eq!(first_name(&[]), "No users found");
        assert_eq!(first_name(&seed()), "John Doe");
        assert_eq!(describe(&seed()[1]), "Jane Smith (30) - jane@example.com");
    }
}
