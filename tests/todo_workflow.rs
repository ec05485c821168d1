use todo_tui::prelude::*;

fn send(model: Model, messages: impl IntoIterator<Item = Message>) -> Model {
    messages
        .into_iter()
        .fold(model, todo_tui::app::update)
}

#[test]
fn test_add_edit_delete_workflow() {
    let model = send(
        Model::default(),
        [
            Message::Paste("Buy milk".to_string()),
            Message::Submit,
            Message::Paste("Walk dog".to_string()),
            Message::Submit,
        ],
    );
    let texts: Vec<&str> = model.todos.items().iter().map(Item::text).collect();
    assert_eq!(texts, ["Buy milk", "Walk dog"]);
    assert_eq!(model.todos.mode(), Mode::Add);

    let first = model.todos.items()[0].id();
    let model = send(
        model,
        [
            Message::BeginEdit(first),
            Message::DeleteWordBack,
            Message::Paste("bread".to_string()),
            Message::Submit,
        ],
    );
    assert_eq!(model.todos.items()[0].text(), "Buy bread");
    assert_eq!(model.todos.items()[0].id(), first);
    assert_eq!(model.todos.mode(), Mode::Add);
    assert_eq!(model.todos.draft(), "");

    let model = send(model, [Message::Remove(first)]);
    let texts: Vec<&str> = model.todos.items().iter().map(Item::text).collect();
    assert_eq!(texts, ["Walk dog"]);
}

#[test]
fn test_deleting_item_under_edit_returns_to_add_mode() {
    let mut list = TodoList::new();
    list.set_draft("a");
    let SubmitOutcome::Added(id) = list.submit() else {
        panic!("expected an added item");
    };

    assert!(list.begin_edit(id));
    assert_eq!(list.mode(), Mode::Editing(id));
    assert!(list.remove(id).is_some());
    assert_eq!(list.mode(), Mode::Add);
    assert_eq!(list.draft(), "");
    assert!(list.is_empty());
}

#[test]
fn test_blank_submissions_are_ignored() {
    let mut list = TodoList::new();
    for blank in ["", "   ", "\t"] {
        list.set_draft(blank);
        assert_eq!(list.submit(), SubmitOutcome::Ignored);
    }
    assert!(list.is_empty());
}
