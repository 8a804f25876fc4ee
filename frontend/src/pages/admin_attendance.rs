use leptos::*;

use crate::{
    api::{AttendanceStatus, AttendanceUpdate},
    components::{
        data_table::{DataTable, SortDirection, TableOptions},
        forms::SubmitButton,
    },
    state::{
        actions::{use_action_controller, ActionOutcome},
        notifications::{use_notifications, Severity},
    },
    utils::{
        csv_export::export_table_to_csv,
        format::{format_date, format_time},
        print_page,
        time::{now_in_app_tz, today_in_app_tz},
        validation::{check_date, parse_input_date, DateConstraint},
    },
};
use chrono::{NaiveDate, NaiveTime};

#[derive(Clone, Copy)]
pub struct AttendanceUpdateForm {
    employee_id: RwSignal<String>,
    date: RwSignal<String>,
    status: RwSignal<String>,
    remarks: RwSignal<String>,
}

impl AttendanceUpdateForm {
    pub fn new() -> Self {
        Self {
            employee_id: create_rw_signal(String::new()),
            date: create_rw_signal(String::new()),
            status: create_rw_signal(AttendanceStatus::default().as_str().to_string()),
            remarks: create_rw_signal(String::new()),
        }
    }

    pub fn employee_id_signal(&self) -> RwSignal<String> {
        self.employee_id
    }

    pub fn date_signal(&self) -> RwSignal<String> {
        self.date
    }

    pub fn status_signal(&self) -> RwSignal<String> {
        self.status
    }

    pub fn remarks_signal(&self) -> RwSignal<String> {
        self.remarks
    }

    /// Attendance is corrected after the fact, so the date may not lie ahead
    /// of `today`.
    pub fn to_update(&self, today: NaiveDate) -> Result<AttendanceUpdate, String> {
        let employee_id = self
            .employee_id
            .get_untracked()
            .trim()
            .parse::<i64>()
            .map_err(|_| "Please enter a numeric employee ID".to_string())?;
        let date = parse_input_date(&self.date.get_untracked())
            .ok_or_else(|| "Please enter a date as YYYY-MM-DD".to_string())?;
        check_date(date, today, DateConstraint::Past).map_err(str::to_string)?;
        let status = AttendanceStatus::parse(&self.status.get_untracked())
            .ok_or_else(|| "Please choose an attendance status".to_string())?;
        Ok(AttendanceUpdate {
            employee_id,
            date,
            status,
            remarks: self.remarks.get_untracked().trim().to_string(),
        })
    }
}

impl Default for AttendanceUpdateForm {
    fn default() -> Self {
        Self::new()
    }
}

const UPDATES_TABLE_ID: &str = "attendanceUpdates";

/// An update the server accepted, with the local time it was applied.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedUpdate {
    pub update: AttendanceUpdate,
    pub applied_at: NaiveTime,
}

pub fn update_row(applied: &AppliedUpdate) -> Vec<String> {
    let update = &applied.update;
    let date = update.date.format("%Y-%m-%d").to_string();
    let time = applied.applied_at.format("%H:%M:%S").to_string();
    vec![
        update.employee_id.to_string(),
        format_date(&date).unwrap_or(date),
        update.status.label().to_string(),
        update.remarks.clone(),
        format_time(&time).unwrap_or(time),
    ]
}

/// Corrections applied during this session, newest employee id first.
#[component]
pub fn RecentUpdates(#[prop(into)] updates: Signal<Vec<AppliedUpdate>>) -> impl IntoView {
    let notifications = use_notifications();
    let headers = vec![
        "Employee ID".to_string(),
        "Date".to_string(),
        "Status".to_string(),
        "Remarks".to_string(),
        "Applied".to_string(),
    ];
    let rows = Signal::derive(move || {
        updates.with(|list| list.iter().map(update_row).collect::<Vec<_>>())
    });
    let options = TableOptions::default()
        .with_page_length(25)
        .with_order(0, SortDirection::Desc);

    let export = move |_: ev::MouseEvent| {
        let selector = format!("#{}", UPDATES_TABLE_ID);
        if let Err(err) = export_table_to_csv(&selector, "attendance_updates.csv") {
            notifications.push(err, Severity::Warning);
        }
    };

    view! {
        <div class="card mt-3">
            <div class="card-header d-flex justify-content-between align-items-center">
                <span>"Recent Updates"</span>
                <div class="btn-group">
                    <button type="button" class="btn btn-sm btn-outline-secondary" on:click=export>
                        "Export CSV"
                    </button>
                    <button type="button" class="btn btn-sm btn-outline-secondary" on:click=move |_| print_page()>
                        "Print"
                    </button>
                </div>
            </div>
            <div class="card-body">
                <DataTable id=UPDATES_TABLE_ID headers=headers rows=rows options=options />
            </div>
        </div>
    }
}

#[component]
pub fn AdminAttendancePage() -> impl IntoView {
    let controller = use_action_controller();
    let form = AttendanceUpdateForm::new();
    let error = create_rw_signal(None::<String>);
    let submitting = create_rw_signal(false);
    let recent = create_rw_signal(Vec::<AppliedUpdate>::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match form.to_update(today_in_app_tz()) {
            Ok(update) => {
                error.set(None);
                let controller = controller.clone();
                submitting.set(true);
                spawn_local(async move {
                    let outcome = controller.update_attendance(update.clone()).await;
                    if matches!(outcome, ActionOutcome::Succeeded { .. }) {
                        let applied_at = now_in_app_tz().time();
                        recent.update(|list| list.push(AppliedUpdate { update, applied_at }));
                    }
                    submitting.set(false);
                });
            }
            Err(message) => error.set(Some(message)),
        }
    };

    view! {
        <form class="card card-body" on:submit=on_submit>
            <h5 class="card-title">"Update Attendance"</h5>
            <label class="form-label" for="employee_id">"Employee ID"</label>
            <input
                id="employee_id"
                type="number"
                class="form-control"
                prop:value=move || form.employee_id_signal().get()
                on:input=move |ev| form.employee_id_signal().set(event_target_value(&ev))
            />
            <label class="form-label" for="date">"Date"</label>
            <input
                id="date"
                type="date"
                class="form-control past-date"
                prop:value=move || form.date_signal().get()
                on:change=move |ev| form.date_signal().set(event_target_value(&ev))
            />
            <label class="form-label" for="status">"Status"</label>
            <select
                id="status"
                class="form-select"
                on:change=move |ev| form.status_signal().set(event_target_value(&ev))
            >
                {AttendanceStatus::ALL
                    .into_iter()
                    .map(|status| {
                        let selected = move || form.status_signal().get() == status.as_str();
                        view! {
                            <option value=status.as_str() selected=selected>{status.label()}</option>
                        }
                    })
                    .collect_view()}
            </select>
            <label class="form-label" for="remarks">"Remarks"</label>
            <textarea
                id="remarks"
                class="form-control mb-3"
                prop:value=move || form.remarks_signal().get()
                on:input=move |ev| form.remarks_signal().set(event_target_value(&ev))
            ></textarea>
            <Show when=move || error.get().is_some() fallback=|| ()>
                <div class="text-danger small mb-2">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <SubmitButton label="Update" pending=submitting />
        </form>
        <RecentUpdates updates=recent />
    }
}
