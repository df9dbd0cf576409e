//! The Go program templates.
//!
//! Each builder emits one block of the generated program. Interpolated
//! parameter slots go through [`crate::params`]; everything else is literal
//! skeleton text.

use serde_json::{Map, Value};

use super::output::Output;
use crate::naming;
use crate::params::{number_or, optional, quoted_or, string_list_or};
use crate::version::ClientVersion;

/// Fixed import block, one variant per client version.
pub(super) fn import_block(version: ClientVersion) -> String {
    let mut out = Output::new();
    out.line(0, "import (");
    out.line(1, "\"context\"");
    out.line(1, "\"encoding/json\"");
    out.line(1, "\"fmt\"");
    out.line(1, "\"io\"");
    out.line(1, "\"net/http\"");
    out.line(1, "\"os\"");
    out.blank();
    out.line(1, "\"github.com/DataDog/datadog-api-client-go/v2/api/datadog\"");
    out.line(
        1,
        format!(
            "\"github.com/DataDog/datadog-api-client-go/v2/api/{}\"",
            version.package()
        ),
    );
    out.line(0, ")");
    out.finish()
}

/// Entry-point wrapper: credential checks, client bootstrap, one call.
pub(super) fn entry_point(function_name: &str) -> String {
    let mut out = Output::new();
    out.line(0, "func main() {");
    out.line(1, "if os.Getenv(\"DD_API_KEY\") == \"\" || os.Getenv(\"DD_APP_KEY\") == \"\" {");
    out.line(
        2,
        "fmt.Fprintln(os.Stderr, \"DD_API_KEY and DD_APP_KEY environment variables must be set\")",
    );
    out.line(2, "os.Exit(1)");
    out.line(1, "}");
    out.line(1, "ctx := datadog.NewDefaultContext(context.Background())");
    out.line(1, "if site := os.Getenv(\"DD_SITE\"); site != \"\" {");
    out.line(
        2,
        "ctx = context.WithValue(ctx, datadog.ContextServerVariables, map[string]string{\"site\": site})",
    );
    out.line(1, "}");
    out.line(1, "configuration := datadog.NewConfiguration()");
    out.line(1, "apiClient := datadog.NewAPIClient(configuration)");
    out.line(
        1,
        format!("if err := {}(ctx, apiClient); err != nil {{", function_name),
    );
    out.line(
        2,
        format!("fmt.Fprintf(os.Stderr, \"{} failed: %v\\n\", err)", function_name),
    );
    out.line(2, "os.Exit(1)");
    out.line(1, "}");
    out.line(0, "}");
    out.finish()
}

/// Reusable error helper appended to every program.
pub(super) fn error_helper() -> String {
    let mut out = Output::new();
    out.line(0, "// handleAPIError prints the error and, when a transport response is");
    out.line(0, "// available, its status and body. The original error is returned unchanged.");
    out.line(0, "func handleAPIError(err error, r *http.Response) error {");
    out.line(1, "fmt.Fprintf(os.Stderr, \"error calling the API: %v\\n\", err)");
    out.line(1, "if r != nil {");
    out.line(2, "fmt.Fprintf(os.Stderr, \"response status: %s\\n\", r.Status)");
    out.line(2, "if body, readErr := io.ReadAll(r.Body); readErr == nil {");
    out.line(3, "fmt.Fprintf(os.Stderr, \"response body: %s\\n\", string(body))");
    out.line(2, "}");
    out.line(1, "}");
    out.line(1, "return err");
    out.line(0, "}");
    out.finish()
}

/// Fallback body for any `(domain, operation)` pair without a template.
/// Never fails regardless of the params shape.
pub(super) fn generic_stub(domain: &str, operation: &str, params: &Map<String, Value>) -> String {
    let name = naming::fallback_entry_point(domain, operation);
    let received = Value::Object(params.clone()).to_string();

    let mut out = Output::new();
    out.line(0, format!("// {} is a placeholder for an operation that has no", name));
    out.line(0, "// dedicated template yet.");
    out.line(
        0,
        format!("func {}(ctx context.Context, apiClient *datadog.APIClient) error {{", name),
    );
    out.line(
        1,
        format!(
            "// No template covers the \"{}\" operation in the \"{}\" domain.",
            operation, domain
        ),
    );
    out.line(1, "// Adapt one of the generated examples or consult the API reference");
    out.line(1, "// for the exact request shape.");
    out.line(1, format!("// params: {}", received));
    out.line(1, "_ = apiClient");
    out.line(1, "return nil");
    out.line(0, "}");
    out.finish()
}

/// Shared tail: error branch, pretty-printed response, normal return.
fn call_tail(out: &mut Output) {
    out.line(1, "if err != nil {");
    out.line(2, "return handleAPIError(err, r)");
    out.line(1, "}");
    out.line(1, "content, _ := json.MarshalIndent(resp, \"\", \"  \")");
    out.line(1, "fmt.Println(string(content))");
    out.line(1, "return nil");
    out.line(0, "}");
}

pub(super) fn metrics_query(params: &Map<String, Value>) -> String {
    let query = quoted_or(params, "query", "avg:system.cpu.user{*}");
    let from = number_or(params, "from", "1636625471000");
    let to = number_or(params, "to", "1636629071000");

    let mut out = Output::new();
    out.line(0, "// queryMetrics runs a timeseries query and prints the datapoints.");
    out.line(0, "func queryMetrics(ctx context.Context, apiClient *datadog.APIClient) error {");
    out.line(1, "api := datadogV2.NewMetricsApi(apiClient)");
    out.line(1, "body := datadogV2.TimeseriesFormulaQueryRequest{");
    out.line(2, "Data: datadogV2.TimeseriesFormulaRequest{");
    out.line(3, "Attributes: datadogV2.TimeseriesFormulaRequestAttributes{");
    out.line(4, format!("From: {},", from));
    out.line(4, format!("To: {},", to));
    out.line(4, "Queries: []datadogV2.TimeseriesQuery{{");
    out.line(5, "MetricsTimeseriesQuery: &datadogV2.MetricsTimeseriesQuery{");
    out.line(6, "DataSource: datadogV2.METRICSDATASOURCE_METRICS,");
    out.line(6, format!("Query: {},", query));
    out.line(5, "},");
    out.line(4, "}},");
    out.line(3, "},");
    out.line(3, "Type: datadogV2.TIMESERIESFORMULAREQUESTTYPE_TIMESERIES_REQUEST,");
    out.line(2, "},");
    out.line(1, "}");
    out.line(1, "resp, r, err := api.QueryTimeseriesData(ctx, body)");
    call_tail(&mut out);
    out.finish()
}

pub(super) fn metrics_list(_params: &Map<String, Value>) -> String {
    let mut out = Output::new();
    out.line(0, "// listMetrics lists tag configurations across all metrics.");
    out.line(0, "func listMetrics(ctx context.Context, apiClient *datadog.APIClient) error {");
    out.line(1, "api := datadogV2.NewMetricsApi(apiClient)");
    out.line(
        1,
        "resp, r, err := api.ListTagConfigurations(ctx, *datadogV2.NewListTagConfigurationsOptionalParameters())",
    );
    call_tail(&mut out);
    out.finish()
}

pub(super) fn metrics_submit(params: &Map<String, Value>) -> String {
    let metric = quoted_or(params, "metric", "system.sample.metric");
    let value = number_or(params, "value", "12.5");
    let tags = string_list_or(params, "tags", "env:example");

    let mut out = Output::new();
    out.line(0, "// submitMetrics sends a single datapoint for a custom metric.");
    out.line(0, "func submitMetrics(ctx context.Context, apiClient *datadog.APIClient) error {");
    out.line(1, "api := datadogV2.NewMetricsApi(apiClient)");
    out.line(1, "body := datadogV2.MetricPayload{");
    out.line(2, "Series: []datadogV2.MetricSeries{{");
    out.line(3, format!("Metric: {},", metric));
    out.line(3, "Type: datadogV2.METRICINTAKETYPE_GAUGE.Ptr(),");
    out.line(3, "Points: []datadogV2.MetricPoint{{");
    out.line(4, format!("Value: datadog.PtrFloat64({}),", value));
    out.line(3, "}},");
    out.line(3, format!("Tags: {},", tags));
    out.line(2, "}},");
    out.line(1, "}");
    out.line(
        1,
        "resp, r, err := api.SubmitMetrics(ctx, body, *datadogV2.NewSubmitMetricsOptionalParameters())",
    );
    call_tail(&mut out);
    out.finish()
}

pub(super) fn monitors_list(params: &Map<String, Value>) -> String {
    let page_size = number_or(params, "page_size", "50");

    let mut out = Output::new();
    out.line(0, "// listMonitors fetches every monitor visible to the current account.");
    out.line(0, "func listMonitors(ctx context.Context, apiClient *datadog.APIClient) error {");
    out.line(1, "api := datadogV1.NewMonitorsApi(apiClient)");
    out.line(
        1,
        format!(
            "resp, r, err := api.ListMonitors(ctx, *datadogV1.NewListMonitorsOptionalParameters().WithPageSize({}))",
            page_size
        ),
    );
    call_tail(&mut out);
    out.finish()
}

pub(super) fn monitors_get(params: &Map<String, Value>) -> String {
    let monitor_id = number_or(params, "monitor_id", "12345");

    let mut out = Output::new();
    out.line(0, "// getMonitor fetches one monitor by id.");
    out.line(0, "func getMonitor(ctx context.Context, apiClient *datadog.APIClient) error {");
    out.line(1, "api := datadogV1.NewMonitorsApi(apiClient)");
    out.line(
        1,
        format!(
            "resp, r, err := api.GetMonitor(ctx, {}, *datadogV1.NewGetMonitorOptionalParameters())",
            monitor_id
        ),
    );
    call_tail(&mut out);
    out.finish()
}

pub(super) fn monitors_create(params: &Map<String, Value>) -> String {
    let name = quoted_or(params, "name", "Example monitor");
    let query = quoted_or(params, "query", "avg(last_5m):avg:system.cpu.user{*} > 90");
    let message = quoted_or(params, "message", "CPU usage is above the threshold");
    let threshold = number_or(params, "threshold", "90");
    let tags = string_list_or(params, "tags", "env:example");

    let mut out = Output::new();
    out.line(0, "// createMonitor creates a metric alert monitor.");
    out.line(0, "func createMonitor(ctx context.Context, apiClient *datadog.APIClient) error {");
    out.line(1, "api := datadogV1.NewMonitorsApi(apiClient)");
    out.line(1, "body := datadogV1.Monitor{");
    out.line(2, format!("Name: datadog.PtrString({}),", name));
    out.line(2, "Type: datadogV1.MONITORTYPE_METRIC_ALERT,");
    out.line(2, format!("Query: {},", query));
    out.line(2, format!("Message: datadog.PtrString({}),", message));
    out.line(2, format!("Tags: {},", tags));
    out.line(2, "Options: &datadogV1.MonitorOptions{");
    out.line(3, "Thresholds: &datadogV1.MonitorThresholds{");
    out.line(4, format!("Critical: datadog.PtrFloat64({}),", threshold));
    out.line(3, "},");
    out.line(2, "},");
    out.line(1, "}");
    out.line(1, "resp, r, err := api.CreateMonitor(ctx, body)");
    call_tail(&mut out);
    out.finish()
}

pub(super) fn dashboards_list(_params: &Map<String, Value>) -> String {
    let mut out = Output::new();
    out.line(0, "// listDashboards lists all dashboards.");
    out.line(0, "func listDashboards(ctx context.Context, apiClient *datadog.APIClient) error {");
    out.line(1, "api := datadogV1.NewDashboardsApi(apiClient)");
    out.line(
        1,
        "resp, r, err := api.ListDashboards(ctx, *datadogV1.NewListDashboardsOptionalParameters())",
    );
    call_tail(&mut out);
    out.finish()
}

pub(super) fn dashboards_create(params: &Map<String, Value>) -> String {
    let title = quoted_or(params, "title", "Example dashboard");
    let query = quoted_or(params, "query", "avg:system.cpu.user{*}");

    let mut out = Output::new();
    out.line(0, "// createDashboard creates an ordered dashboard with one timeseries widget.");
    out.line(0, "func createDashboard(ctx context.Context, apiClient *datadog.APIClient) error {");
    out.line(1, "api := datadogV1.NewDashboardsApi(apiClient)");
    out.line(1, "body := datadogV1.Dashboard{");
    out.line(2, format!("Title: {},", title));
    out.line(2, "LayoutType: datadogV1.DASHBOARDLAYOUTTYPE_ORDERED,");
    out.line(2, "Widgets: []datadogV1.Widget{{");
    out.line(3, "Definition: datadogV1.WidgetDefinition{");
    out.line(4, "TimeseriesWidgetDefinition: &datadogV1.TimeseriesWidgetDefinition{");
    out.line(5, "Type: datadogV1.TIMESERIESWIDGETDEFINITIONTYPE_TIMESERIES,");
    out.line(5, "Requests: []datadogV1.TimeseriesWidgetRequest{{");
    out.line(6, format!("Q: datadog.PtrString({}),", query));
    out.line(5, "}},");
    out.line(4, "},");
    out.line(3, "},");
    out.line(2, "}},");
    out.line(1, "}");
    out.line(1, "resp, r, err := api.CreateDashboard(ctx, body)");
    call_tail(&mut out);
    out.finish()
}

pub(super) fn logs_search(params: &Map<String, Value>) -> String {
    let query = quoted_or(params, "query", "*");
    let from = quoted_or(params, "from", "now-15m");
    let to = quoted_or(params, "to", "now");
    let limit = number_or(params, "limit", "25");

    let mut out = Output::new();
    out.line(0, "// searchLogs pages through log events matching the filter.");
    out.line(0, "func searchLogs(ctx context.Context, apiClient *datadog.APIClient) error {");
    out.line(1, "api := datadogV2.NewLogsApi(apiClient)");
    out.line(1, "body := datadogV2.LogsListRequest{");
    out.line(2, "Filter: &datadogV2.LogsQueryFilter{");
    out.line(3, format!("Query: datadog.PtrString({}),", query));
    out.line(3, format!("From: datadog.PtrString({}),", from));
    out.line(3, format!("To: datadog.PtrString({}),", to));
    out.line(2, "},");
    out.line(2, "Page: &datadogV2.LogsListRequestPage{");
    out.line(3, format!("Limit: datadog.PtrInt32({}),", limit));
    out.line(2, "},");
    out.line(2, "Sort: datadogV2.LOGSSORT_TIMESTAMP_ASCENDING.Ptr(),");
    out.line(1, "}");
    out.line(
        1,
        "resp, r, err := api.ListLogs(ctx, *datadogV2.NewListLogsOptionalParameters().WithBody(body))",
    );
    call_tail(&mut out);
    out.finish()
}

pub(super) fn traces_list(params: &Map<String, Value>) -> String {
    let query = quoted_or(params, "query", "service:web-store");
    let from = quoted_or(params, "from", "now-15m");
    let to = quoted_or(params, "to", "now");
    let limit = number_or(params, "limit", "25");

    let mut out = Output::new();
    out.line(0, "// listSpans searches indexed spans matching the filter.");
    out.line(0, "func listSpans(ctx context.Context, apiClient *datadog.APIClient) error {");
    out.line(1, "api := datadogV2.NewSpansApi(apiClient)");
    out.line(1, "body := datadogV2.SpansListRequest{");
    out.line(2, "Data: &datadogV2.SpansListRequestData{");
    out.line(3, "Attributes: &datadogV2.SpansListRequestAttributes{");
    out.line(4, "Filter: &datadogV2.SpansQueryFilter{");
    out.line(5, format!("Query: datadog.PtrString({}),", query));
    out.line(5, format!("From: datadog.PtrString({}),", from));
    out.line(5, format!("To: datadog.PtrString({}),", to));
    out.line(4, "},");
    out.line(4, "Page: &datadogV2.SpansListRequestPage{");
    out.line(5, format!("Limit: datadog.PtrInt32({}),", limit));
    out.line(4, "},");
    out.line(3, "},");
    out.line(3, "Type: datadogV2.SPANSLISTREQUESTTYPE_SEARCH_REQUEST.Ptr(),");
    out.line(2, "},");
    out.line(1, "}");
    out.line(1, "resp, r, err := api.ListSpans(ctx, body)");
    call_tail(&mut out);
    out.finish()
}

pub(super) fn slos_list(params: &Map<String, Value>) -> String {
    let limit = number_or(params, "limit", "25");

    let mut out = Output::new();
    out.line(0, "// listSLOs lists service level objectives.");
    out.line(0, "func listSLOs(ctx context.Context, apiClient *datadog.APIClient) error {");
    out.line(1, "api := datadogV1.NewServiceLevelObjectivesApi(apiClient)");
    out.line(
        1,
        format!(
            "resp, r, err := api.ListSLOs(ctx, *datadogV1.NewListSLOsOptionalParameters().WithLimit({}))",
            limit
        ),
    );
    call_tail(&mut out);
    out.finish()
}

pub(super) fn incidents_list(params: &Map<String, Value>) -> String {
    let page_size = number_or(params, "page_size", "10");

    let mut out = Output::new();
    out.line(0, "// listIncidents lists incidents, newest first.");
    out.line(0, "func listIncidents(ctx context.Context, apiClient *datadog.APIClient) error {");
    out.line(1, "api := datadogV2.NewIncidentsApi(apiClient)");
    out.line(
        1,
        format!(
            "resp, r, err := api.ListIncidents(ctx, *datadogV2.NewListIncidentsOptionalParameters().WithPageSize({}))",
            page_size
        ),
    );
    call_tail(&mut out);
    out.finish()
}

pub(super) fn synthetics_list(_params: &Map<String, Value>) -> String {
    let mut out = Output::new();
    out.line(0, "// listSyntheticsTests lists all synthetic tests.");
    out.line(0, "func listSyntheticsTests(ctx context.Context, apiClient *datadog.APIClient) error {");
    out.line(1, "api := datadogV1.NewSyntheticsApi(apiClient)");
    out.line(1, "resp, r, err := api.ListTests(ctx, *datadogV1.NewListTestsOptionalParameters())");
    call_tail(&mut out);
    out.finish()
}

pub(super) fn rum_search(params: &Map<String, Value>) -> String {
    let query = quoted_or(params, "query", "@type:view");
    let from = quoted_or(params, "from", "now-15m");
    let to = quoted_or(params, "to", "now");
    let limit = number_or(params, "limit", "25");

    let mut out = Output::new();
    out.line(0, "// searchRumEvents pages through RUM events matching the filter.");
    out.line(0, "func searchRumEvents(ctx context.Context, apiClient *datadog.APIClient) error {");
    out.line(1, "api := datadogV2.NewRUMApi(apiClient)");
    out.line(1, "body := datadogV2.RUMSearchEventsRequest{");
    out.line(2, "Filter: &datadogV2.RUMQueryFilter{");
    out.line(3, format!("Query: datadog.PtrString({}),", query));
    out.line(3, format!("From: datadog.PtrString({}),", from));
    out.line(3, format!("To: datadog.PtrString({}),", to));
    out.line(2, "},");
    out.line(2, "Page: &datadogV2.RUMQueryPageOptions{");
    out.line(3, format!("Limit: datadog.PtrInt32({}),", limit));
    out.line(2, "},");
    out.line(2, "Sort: datadogV2.RUMSORT_TIMESTAMP_ASCENDING.Ptr(),");
    out.line(1, "}");
    out.line(1, "resp, r, err := api.SearchRUMEvents(ctx, body)");
    call_tail(&mut out);
    out.finish()
}

pub(super) fn security_list(params: &Map<String, Value>) -> String {
    let query = quoted_or(params, "query", "security:attack");
    let limit = number_or(params, "limit", "25");

    let mut out = Output::new();
    out.line(0, "// listSecuritySignals searches security monitoring signals.");
    out.line(0, "func listSecuritySignals(ctx context.Context, apiClient *datadog.APIClient) error {");
    out.line(1, "api := datadogV2.NewSecurityMonitoringApi(apiClient)");
    out.line(
        1,
        format!(
            "resp, r, err := api.ListSecurityMonitoringSignals(ctx, *datadogV2.NewListSecurityMonitoringSignalsOptionalParameters().WithFilterQuery({}).WithPageLimit({}))",
            query, limit
        ),
    );
    call_tail(&mut out);
    out.finish()
}

/// The one conditional template: the filter line is emitted only when a
/// `filter` parameter is present.
pub(super) fn infrastructure_hosts(params: &Map<String, Value>) -> String {
    let count = number_or(params, "count", "100");
    let filter = optional(params, "filter");

    let mut out = Output::new();
    out.line(0, "// listHosts lists hosts reporting to the platform.");
    out.line(0, "func listHosts(ctx context.Context, apiClient *datadog.APIClient) error {");
    out.line(1, "api := datadogV1.NewHostsApi(apiClient)");
    out.line(
        1,
        format!("opts := datadogV1.NewListHostsOptionalParameters().WithCount({})", count),
    );
    if let Some(filter) = filter {
        out.line(1, format!("opts = opts.WithFilter({})", filter));
    }
    out.line(1, "resp, r, err := api.ListHosts(ctx, *opts)");
    call_tail(&mut out);
    out.finish()
}

pub(super) fn admin_users(_params: &Map<String, Value>) -> String {
    let mut out = Output::new();
    out.line(0, "// listUsers lists users in the organization.");
    out.line(0, "func listUsers(ctx context.Context, apiClient *datadog.APIClient) error {");
    out.line(1, "api := datadogV1.NewUsersApi(apiClient)");
    out.line(1, "resp, r, err := api.ListUsers(ctx)");
    call_tail(&mut out);
    out.finish()
}
