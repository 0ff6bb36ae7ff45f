use criterion::{black_box, criterion_group, criterion_main, Criterion};

use msgen::answers::{AnswerRecord, BuildTool, CloudOption, DbOption, Selection};
use msgen::plan_project;
use msgen::render::{build_context, plan_jobs, plan_render};
use msgen::resolve::{FeatureFlags, OutputPaths};
use msgen::template::TemplateSource;

fn sample_answers() -> AnswerRecord {
    AnswerRecord {
        package_name: "com.bench.service".to_string(),
        base_name: "bench-service".to_string(),
        build_tool: Selection::new(vec![BuildTool::Gradle]),
        db: Selection::new(vec![DbOption::Jpa, DbOption::Mysql]),
        cloud: Selection::new(vec![CloudOption::ConfigClient, CloudOption::Eureka]),
        image_name: "bench/service".to_string(),
        ..AnswerRecord::default()
    }
}

fn bench_flag_derivation(c: &mut Criterion) {
    let answers = sample_answers();

    c.bench_function("derive_flags", |b| {
        b.iter(|| black_box(FeatureFlags::derive(black_box(&answers))));
    });

    let flags = FeatureFlags::derive(&answers);
    c.bench_function("build_context", |b| {
        b.iter(|| black_box(build_context(black_box(&flags)).unwrap()));
    });
}

fn bench_job_planning(c: &mut Criterion) {
    let flags = FeatureFlags::derive(&sample_answers());
    let paths = OutputPaths::new(&flags.base_name, &flags.package_name);

    c.bench_function("plan_jobs", |b| {
        b.iter(|| black_box(plan_jobs(black_box(&flags), black_box(&paths)).unwrap()));
    });
}

fn bench_render_planning(c: &mut Criterion) {
    let answers = sample_answers();
    let flags = FeatureFlags::derive(&answers);
    let paths = OutputPaths::new(&flags.base_name, &flags.package_name);
    let jobs = plan_jobs(&flags, &paths).unwrap();
    let source = TemplateSource::Embedded;

    c.bench_function("plan_render", |b| {
        b.iter(|| black_box(plan_render(black_box(&jobs), &source).unwrap()));
    });

    c.bench_function("plan_project", |b| {
        b.iter(|| black_box(plan_project(black_box(&answers), &source).unwrap()));
    });
}

fn bench_full_generation(c: &mut Criterion) {
    let answers = sample_answers();
    let source = TemplateSource::Embedded;
    let plan = plan_project(&answers, &source).unwrap();

    c.bench_function("execute_plan", |b| {
        b.iter(|| {
            let output = tempfile::tempdir().unwrap();
            let result = msgen::render::execute_plan(black_box(&plan), output.path()).unwrap();
            black_box(result)
        });
    });
}

criterion_group!(
    benches,
    bench_flag_derivation,
    bench_job_planning,
    bench_render_planning,
    bench_full_generation
);
criterion_main!(benches);
