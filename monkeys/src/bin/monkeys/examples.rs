use crate::commands::{friends, monkey, troop};

#[derive(Clone, Copy)]
pub struct ExampleGroup {
    pub title: &'static str,
    pub commands: &'static [&'static str],
}

#[derive(Clone, Copy)]
pub struct CommandExample {
    pub name: &'static str,
    pub groups: &'static [ExampleGroup],
}

pub fn command_examples() -> &'static [CommandExample] {
    &[
        CommandExample {
            name: "list",
            groups: monkey::LIST_EXAMPLES,
        },
        CommandExample {
            name: "add",
            groups: monkey::ADD_EXAMPLES,
        },
        CommandExample {
            name: "edit",
            groups: monkey::EDIT_EXAMPLES,
        },
        CommandExample {
            name: "delete",
            groups: monkey::DELETE_EXAMPLES,
        },
        CommandExample {
            name: "friends",
            groups: friends::FRIENDS_EXAMPLES,
        },
        CommandExample {
            name: "best-friend",
            groups: friends::BEST_FRIEND_EXAMPLES,
        },
        CommandExample {
            name: "seed",
            groups: troop::SEED_EXAMPLES,
        },
    ]
}
