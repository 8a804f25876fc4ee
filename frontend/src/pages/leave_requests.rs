use leptos::*;
use leptos_router::use_params_map;

use crate::state::actions::{dispatch, use_action_controller};

#[component]
pub fn LeaveDecisionPage() -> impl IntoView {
    let params = use_params_map();
    let request_id = move || {
        params.with(|p| p.get("id").and_then(|id| id.parse::<i64>().ok()))
    };

    view! {
        {move || match request_id() {
            Some(id) => view! { <LeaveDecisionControls request_id=id /> }.into_view(),
            None => view! {
                <div class="alert alert-warning">"Unknown leave request."</div>
            }
            .into_view(),
        }}
    }
}

#[component]
pub fn LeaveDecisionControls(request_id: i64) -> impl IntoView {
    let controller = use_action_controller();
    let comment = create_rw_signal(String::new());
    let for_approve = controller.clone();
    let for_reject = controller;

    let on_approve = move |_| {
        let text = comment.get_untracked();
        let note = (!text.trim().is_empty()).then_some(text);
        dispatch(&for_approve, move |c| async move {
            c.approve_leave(request_id, note).await
        });
    };
    let on_reject = move |_| {
        let text = comment.get_untracked();
        dispatch(&for_reject, move |c| async move {
            c.reject_leave(request_id, text).await
        });
    };

    view! {
        <div class="card">
            <div class="card-header">{format!("Leave request #{}", request_id)}</div>
            <div class="card-body">
                <label class="form-label" for="admin_comment">"Admin comment"</label>
                <textarea
                    id="admin_comment"
                    class="form-control mb-3"
                    prop:value=move || comment.get()
                    on:input=move |ev| comment.set(event_target_value(&ev))
                ></textarea>
                <div class="d-flex gap-2">
                    <button type="button" class="btn btn-success" on:click=on_approve>
                        "Approve"
                    </button>
                    <button type="button" class="btn btn-danger" on:click=on_reject>
                        "Reject"
                    </button>
                </div>
            </div>
        </div>
    }
}
