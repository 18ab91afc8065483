//! OpenAPI documentation for the records API, served at `/docs`.

use utoipa::OpenApi;

use crate::api::handlers;
use crate::api::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Registrar API",
        description = "Administrative records: departments, housing, people, courses, scheduling, exams and enrollments."
    ),
    paths(
        handlers::departments::list_departments,
        handlers::departments::create_department,
        handlers::departments::update_department,
        handlers::departments::delete_department,
        handlers::hostels::list_hostels,
        handlers::hostels::create_hostel,
        handlers::hostels::update_hostel,
        handlers::hostels::delete_hostel,
        handlers::rooms::list_rooms,
        handlers::rooms::create_room,
        handlers::rooms::update_room,
        handlers::rooms::delete_room,
        handlers::instructors::list_instructors,
        handlers::instructors::create_instructor,
        handlers::instructors::update_instructor,
        handlers::instructors::delete_instructor,
        handlers::hostel_admins::list_hostel_admins,
        handlers::hostel_admins::create_hostel_admin,
        handlers::hostel_admins::delete_hostel_admin,
        handlers::students::list_students,
        handlers::students::create_student,
        handlers::students::update_student,
        handlers::students::delete_student,
        handlers::courses::list_courses,
        handlers::courses::create_course,
        handlers::courses::update_course,
        handlers::courses::delete_course,
        handlers::sections::list_sections,
        handlers::sections::create_section,
        handlers::sections::update_section,
        handlers::sections::delete_section,
        handlers::classrooms::list_classrooms,
        handlers::classrooms::create_classroom,
        handlers::classrooms::update_classroom,
        handlers::classrooms::delete_classroom,
        handlers::time_slots::list_time_slots,
        handlers::time_slots::create_time_slot,
        handlers::time_slots::update_time_slot,
        handlers::time_slots::delete_time_slot,
        handlers::exams::list_exams,
        handlers::exams::create_exam,
        handlers::exams::update_exam,
        handlers::exams::delete_exam,
        handlers::exam_students::list_exam_students,
        handlers::exam_students::create_exam_student,
        handlers::exam_students::update_exam_student,
        handlers::exam_students::delete_exam_student,
        handlers::enrollments::list_enrollments,
        handlers::enrollments::create_enrollment,
        handlers::enrollments::update_enrollment,
        handlers::enrollments::delete_enrollment,
        handlers::stats::get_stats,
    ),
    components(schemas(
        models::departments::DepartmentCreate,
        models::departments::DepartmentUpdate,
        models::departments::DepartmentResponse,
        models::hostels::HostelCreate,
        models::hostels::HostelUpdate,
        models::hostels::HostelResponse,
        models::rooms::RoomCreate,
        models::rooms::RoomUpdate,
        models::rooms::RoomResponse,
        models::instructors::InstructorCreate,
        models::instructors::InstructorUpdate,
        models::instructors::InstructorResponse,
        models::hostel_admins::HostelAdminCreate,
        models::hostel_admins::HostelAdminResponse,
        models::students::StudentCreate,
        models::students::StudentUpdate,
        models::students::StudentResponse,
        models::courses::CourseCreate,
        models::courses::CourseUpdate,
        models::courses::CourseResponse,
        models::sections::SectionCreate,
        models::sections::SectionUpdate,
        models::sections::SectionResponse,
        models::classrooms::ClassroomCreate,
        models::classrooms::ClassroomUpdate,
        models::classrooms::ClassroomResponse,
        models::time_slots::TimeSlotCreate,
        models::time_slots::TimeSlotUpdate,
        models::time_slots::TimeSlotResponse,
        models::exams::ExamCreate,
        models::exams::ExamUpdate,
        models::exams::ExamResponse,
        models::exam_students::ExamStudentCreate,
        models::exam_students::ExamStudentUpdate,
        models::exam_students::ExamStudentResponse,
        models::enrollments::EnrollmentCreate,
        models::enrollments::EnrollmentUpdate,
        models::enrollments::EnrollmentResponse,
        models::stats::StatsResponse,
    )),
    tags(
        (name = "departments", description = "Academic departments"),
        (name = "hostels", description = "Student housing"),
        (name = "rooms", description = "Hostel rooms"),
        (name = "instructors", description = "Teaching staff"),
        (name = "hostel-admins", description = "Instructor/hostel administration assignments"),
        (name = "students", description = "Student records"),
        (name = "courses", description = "Course catalog"),
        (name = "sections", description = "Course offerings per term"),
        (name = "classrooms", description = "Teaching rooms"),
        (name = "timeslots", description = "Weekly teaching slots"),
        (name = "exams", description = "Exams"),
        (name = "exam-students", description = "Exam registrations"),
        (name = "enrollments", description = "Student enrollments and grades"),
        (name = "stats", description = "Aggregate counts"),
    )
)]
pub struct ApiDoc;
